//! Axis components: gridlines and tick labels along the left and bottom edges.
//!
//! Axes are stateless; every call re-derives the ticks from the scale.

use std::fmt::Write;

use serde::Serialize;

use crate::scale::Scale;
use crate::svg::{ChartColor, Rule, SvgElement, Text, TextAnchor};

/// Tick count used by the bottom axis when none is given.
pub const DEFAULT_BOTTOM_TICKS: usize = 10;

/// Visual settings shared by both axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisStyle {
    pub grid_color: ChartColor,
    pub grid_opacity: f64,
    pub label_color: ChartColor,
    pub font_size: f64,
    /// Horizontal label position of the left axis (negative is left of the plot)
    pub label_padding: f64,
    /// Distance of bottom-axis labels below the plot
    pub label_offset: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            grid_color: ChartColor::css_var("grid", "#d3d3d3"),
            grid_opacity: 0.5,
            label_color: ChartColor::css_var("axis-label", "#c5c5c5"),
            font_size: 12.0,
            label_padding: -20.0,
            label_offset: 20.0,
        }
    }
}

/// One tick: the gridline across the plot and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis
    pub position: f64,
    pub gridline: Rule,
    pub label: Text,
}

impl SvgElement for AxisTick {
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, r#"<g class="tick">"#);
        let _ = writeln!(output, "    {}", self.gridline.render());
        let _ = writeln!(output, "    {}", self.label.render());
        output.push_str("</g>");
        output
    }
}

/// Left axis with default styling.
///
/// For each tick a horizontal gridline spans `[0, pixel_width]` at the
/// mapped y position.
#[must_use]
pub fn left_axis<S: Scale>(scale: &S, pixel_width: f64, tick_count: usize) -> Vec<AxisTick> {
    left_axis_styled(scale, pixel_width, tick_count, &AxisStyle::default())
}

#[must_use]
pub fn left_axis_styled<S: Scale>(
    scale: &S,
    pixel_width: f64,
    tick_count: usize,
    style: &AxisStyle,
) -> Vec<AxisTick> {
    scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| {
            let y = scale.map(value);
            AxisTick {
                position: y,
                gridline: Rule::new(0.0, y, pixel_width, y, style.grid_color.clone())
                    .with_opacity(style.grid_opacity),
                label: Text::new(style.label_padding, y, scale.format_tick(value, tick_count))
                    .with_color(style.label_color.clone())
                    .with_font_size(style.font_size)
                    .with_dy_em(0.32),
            }
        })
        .collect()
}

/// Bottom axis with default styling and [`DEFAULT_BOTTOM_TICKS`] ticks.
#[must_use]
pub fn bottom_axis<S: Scale>(scale: &S, pixel_height: f64) -> Vec<AxisTick> {
    bottom_axis_styled(
        scale,
        pixel_height,
        DEFAULT_BOTTOM_TICKS,
        &AxisStyle::default(),
    )
}

#[must_use]
pub fn bottom_axis_with_ticks<S: Scale>(
    scale: &S,
    pixel_height: f64,
    tick_count: usize,
) -> Vec<AxisTick> {
    bottom_axis_styled(scale, pixel_height, tick_count, &AxisStyle::default())
}

/// Bottom axis: vertical gridlines spanning `[0, pixel_height]`, labels centered below.
#[must_use]
pub fn bottom_axis_styled<S: Scale>(
    scale: &S,
    pixel_height: f64,
    tick_count: usize,
    style: &AxisStyle,
) -> Vec<AxisTick> {
    scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| {
            let x = scale.map(value);
            AxisTick {
                position: x,
                gridline: Rule::new(x, 0.0, x, pixel_height, style.grid_color.clone())
                    .with_opacity(style.grid_opacity),
                label: Text::new(
                    x,
                    pixel_height + style.label_offset,
                    scale.format_tick(value, tick_count),
                )
                .with_anchor(TextAnchor::Middle)
                .with_color(style.label_color.clone())
                .with_font_size(style.font_size),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "axis_tests.rs"]
mod tests;
