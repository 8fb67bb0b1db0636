use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::{ChartOptions, Layout, Margin, PanelStyle, XDomainPolicy, YDomainPolicy};
use crate::dataset::SeriesOrder;
use crate::scale::DegeneratePolicy;
use crate::svg::ChartColor;
use crate::{ChartError, Result};

/// Panel size and grid arrangement [layout].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Outer width of one panel in pixels, margins included.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Outer height of one panel in pixels, margins included.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Panels per grid row.
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Space around each plot [layout.margin].
    #[serde(default)]
    pub margin: Margin,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            columns: default_columns(),
            margin: Margin::default(),
        }
    }
}

/// Value-axis policy as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YDomainMode {
    #[default]
    Shared,
    Independent,
    /// Requires `y_min` and `y_max`.
    Fixed,
}

/// Domain policies [scales].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScalesConfig {
    /// Time axis policy: "shared" or "independent".
    #[serde(default)]
    pub x: XDomainPolicy,

    /// Value axis policy: "shared", "independent" or "fixed".
    #[serde(default)]
    pub y: YDomainMode,

    /// Lower bound of a fixed value axis.
    #[serde(default)]
    pub y_min: Option<f64>,

    /// Upper bound of a fixed value axis.
    #[serde(default)]
    pub y_max: Option<f64>,

    /// First date of every time axis (e.g., "2020-03-02").
    #[serde(default)]
    pub x_start: Option<NaiveDate>,

    /// Last date of every time axis.
    #[serde(default)]
    pub x_end: Option<NaiveDate>,

    /// Zero-width domains: "reject" omits the panel, "constant" centers it.
    #[serde(default)]
    pub degenerate: DegeneratePolicy,

    /// Round derived value axes outward to tick multiples.
    #[serde(default = "default_true")]
    pub nice: bool,
}

impl Default for ScalesConfig {
    fn default() -> Self {
        Self {
            x: XDomainPolicy::default(),
            y: YDomainMode::default(),
            y_min: None,
            y_max: None,
            x_start: None,
            x_end: None,
            degenerate: DegeneratePolicy::default(),
            nice: true,
        }
    }
}

/// Tick counts and label placement [axes].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxesConfig {
    #[serde(default = "default_left_ticks")]
    pub left_ticks: usize,

    #[serde(default = "default_bottom_ticks")]
    pub bottom_ticks: usize,

    /// Horizontal position of value labels (negative is left of the plot).
    #[serde(default = "default_label_padding")]
    pub label_padding: f64,

    /// Distance of date labels below the plot.
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,

    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            left_ticks: default_left_ticks(),
            bottom_ticks: default_bottom_ticks(),
            label_padding: default_label_padding(),
            label_offset: default_label_offset(),
            font_size: default_font_size(),
        }
    }
}

/// Colors and strokes [style].
///
/// Colors left unset use CSS variables (`--color-above`, `--color-below`,
/// `--color-frame`) with built-in fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleConfig {
    /// Paint values above `threshold` and below it in different colors.
    #[serde(default = "default_true")]
    pub gradient: bool,

    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default)]
    pub above_color: Option<String>,

    #[serde(default)]
    pub below_color: Option<String>,

    #[serde(default)]
    pub frame_color: Option<String>,

    #[serde(default = "default_band_opacity")]
    pub band_opacity: f64,

    #[serde(default = "default_band_stroke_width")]
    pub band_stroke_width: f64,

    #[serde(default = "default_line_stroke_width")]
    pub line_stroke_width: f64,

    /// Marker radius at each central value (0 draws no markers).
    #[serde(default)]
    pub dot_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            gradient: true,
            threshold: default_threshold(),
            above_color: None,
            below_color: None,
            frame_color: None,
            band_opacity: default_band_opacity(),
            band_stroke_width: default_band_stroke_width(),
            line_stroke_width: default_line_stroke_width(),
            dot_radius: 0.0,
        }
    }
}

/// Root of `.bandchart.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Series order applied before charting.
    #[serde(default)]
    pub order: SeriesOrder,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub scales: ScalesConfig,

    #[serde(default)]
    pub axes: AxesConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

fn color_or(configured: Option<&String>, fallback: ChartColor) -> ChartColor {
    configured.map_or(fallback, |hex| ChartColor::hex(hex))
}

impl Config {
    /// Chart container options described by this config.
    ///
    /// # Errors
    /// Returns a `Config` error if the value axis is fixed without both bounds.
    pub fn chart_options(&self) -> Result<ChartOptions> {
        let defaults = ChartOptions::default();

        let y_domain = match (self.scales.y, self.scales.y_min, self.scales.y_max) {
            (YDomainMode::Shared, ..) => YDomainPolicy::Shared,
            (YDomainMode::Independent, ..) => YDomainPolicy::Independent,
            (YDomainMode::Fixed, Some(min), Some(max)) => YDomainPolicy::Fixed { min, max },
            (YDomainMode::Fixed, ..) => {
                return Err(ChartError::Config(
                    "scales.y = \"fixed\" requires both scales.y_min and scales.y_max".to_string(),
                ));
            }
        };

        let style_defaults = PanelStyle::default();
        let style = PanelStyle {
            threshold: self.style.gradient.then_some(self.style.threshold),
            above: color_or(self.style.above_color.as_ref(), style_defaults.above),
            below: color_or(self.style.below_color.as_ref(), style_defaults.below),
            band_opacity: self.style.band_opacity,
            band_stroke_width: self.style.band_stroke_width,
            line_stroke_width: self.style.line_stroke_width,
            dot_radius: self.style.dot_radius,
            frame: color_or(self.style.frame_color.as_ref(), style_defaults.frame),
        };

        let mut axis_style = defaults.axis_style;
        axis_style.label_padding = self.axes.label_padding;
        axis_style.label_offset = self.axes.label_offset;
        axis_style.font_size = self.axes.font_size;

        Ok(ChartOptions {
            layout: Layout {
                width: self.layout.width,
                height: self.layout.height,
                margin: self.layout.margin,
                columns: self.layout.columns,
            },
            x_domain: self.scales.x,
            y_domain,
            x_start: self.scales.x_start.and_then(|d| d.and_hms_opt(0, 0, 0)),
            x_end: self.scales.x_end.and_then(|d| d.and_hms_opt(0, 0, 0)),
            degenerate: self.scales.degenerate,
            nice_y: self.scales.nice,
            left_ticks: self.axes.left_ticks,
            bottom_ticks: self.axes.bottom_ticks,
            axis_style,
            style,
        })
    }
}

const fn default_true() -> bool {
    true
}

const fn default_width() -> f64 {
    500.0
}

const fn default_height() -> f64 {
    260.0
}

const fn default_columns() -> usize {
    2
}

const fn default_left_ticks() -> usize {
    5
}

const fn default_bottom_ticks() -> usize {
    crate::axis::DEFAULT_BOTTOM_TICKS
}

const fn default_label_padding() -> f64 {
    -20.0
}

const fn default_label_offset() -> f64 {
    20.0
}

const fn default_font_size() -> f64 {
    12.0
}

const fn default_threshold() -> f64 {
    1.0
}

const fn default_band_opacity() -> f64 {
    0.08
}

const fn default_band_stroke_width() -> f64 {
    3.0
}

const fn default_line_stroke_width() -> f64 {
    1.5
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
