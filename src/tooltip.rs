//! Tooltip: resolves a pointer column to the nearest observation.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::dataset::Observation;
use crate::scale::Scale;
use crate::svg::{ChartColor, Circle, Rect, Rule, SvgElement, Text, TextAnchor};

/// Label shown for an observation.
#[must_use]
pub fn observation_label(obs: &Observation) -> String {
    format!(
        "{}: {:.2} [{:.2}, {:.2}]",
        obs.date.format("%b %d, %Y"),
        obs.central,
        obs.low,
        obs.high
    )
}

/// Nearest-observation lookup over one series.
///
/// Observations must be sorted by date (see `Series::validate`).
#[derive(Debug, Clone, Copy)]
pub struct Tooltip<'a, S> {
    x_scale: &'a S,
    observations: &'a [Observation],
    pixel_width: f64,
}

impl<'a, S> Tooltip<'a, S>
where
    S: Scale<Value = NaiveDateTime>,
{
    #[must_use]
    pub const fn new(x_scale: &'a S, observations: &'a [Observation], pixel_width: f64) -> Self {
        Self {
            x_scale,
            observations,
            pixel_width,
        }
    }

    /// Clamp a pointer column into `[0, pixel_width]`.
    fn clamp(&self, pointer_x: f64) -> f64 {
        if pointer_x.is_nan() {
            return 0.0;
        }
        pointer_x.clamp(0.0, self.pixel_width.max(0.0))
    }

    /// Observation nearest in time to the pointer column.
    ///
    /// Pointers outside the plot are clamped; ties go to the earlier observation.
    #[must_use]
    pub fn resolve(&self, pointer_x: f64) -> Option<&'a Observation> {
        let observations = self.observations;
        let target = self.x_scale.invert(self.clamp(pointer_x));

        let i = observations.partition_point(|o| o.date < target);
        if i == 0 {
            return observations.first();
        }
        if i == observations.len() {
            return observations.last();
        }

        let before = &observations[i - 1];
        let after = &observations[i];
        if after.date - target < target - before.date {
            Some(after)
        } else {
            Some(before)
        }
    }

    /// Tooltip mark for the pointer: a rule and dot at the matched observation,
    /// and its label at the pointer's column.
    #[must_use]
    pub fn mark<Y>(&self, pointer_x: f64, y_scale: &Y, pixel_height: f64) -> Option<TooltipMark>
    where
        Y: Scale<Value = f64>,
    {
        let obs = self.resolve(pointer_x)?;
        let column = self.clamp(pointer_x);
        let x = self.x_scale.map(obs.date);
        let y = y_scale.map(obs.central);

        Some(TooltipMark {
            observation: obs.clone(),
            column,
            rule: Rule::new(x, 0.0, x, pixel_height, ChartColor::css_var("tooltip", "#999999"))
                .with_dash("3,3"),
            dot: Circle::new(x, y, 3.5, ChartColor::css_var("tooltip", "#333333")),
            label: Text::new(column, -6.0, observation_label(obs))
                .with_anchor(TextAnchor::Middle)
                .with_font_size(11.0),
        })
    }

    /// Pixel column owned by each observation under nearest-neighbor resolution.
    ///
    /// Zones are contiguous, cover `[0, pixel_width]` and follow observation order;
    /// observations that own no width are omitted.
    #[must_use]
    pub fn hover_zones(&self) -> Vec<HoverZone> {
        let width = self.pixel_width.max(0.0);
        let xs: Vec<f64> = self
            .observations
            .iter()
            .map(|o| self.x_scale.map(o.date).clamp(0.0, width))
            .collect();

        let mut zones = Vec::with_capacity(xs.len());
        for (index, x) in xs.iter().enumerate() {
            let start = if index == 0 {
                0.0
            } else {
                f64::midpoint(xs[index - 1], *x)
            };
            let end = xs
                .get(index + 1)
                .map_or(width, |next| f64::midpoint(*x, *next));
            if end > start {
                zones.push(HoverZone { index, start, end });
            }
        }
        zones
    }
}

/// A horizontal pixel interval owned by the observation at `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverZone {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

/// Render description of an active tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipMark {
    pub observation: Observation,
    /// Clamped pointer column the label is drawn at
    pub column: f64,
    pub rule: Rule,
    pub dot: Circle,
    pub label: Text,
}

impl SvgElement for TooltipMark {
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, r#"<g class="tooltip">"#);
        let _ = writeln!(output, "    {}", self.rule.render());
        let _ = writeln!(output, "    {}", self.dot.render());
        let _ = writeln!(output, "    {}", self.label.render());
        output.push_str("</g>");
        output
    }
}

impl HoverZone {
    /// Transparent hover target carrying `title` for the whole plot height.
    #[must_use]
    pub fn to_rect(&self, pixel_height: f64, title: impl Into<String>) -> Rect {
        Rect::new(self.start, 0.0, self.end - self.start, pixel_height).with_title(title)
    }
}

#[cfg(test)]
#[path = "tooltip_tests.rs"]
mod tests;
