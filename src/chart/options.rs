//! Chart container options: layout, domain policies and panel styling.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::axis::{AxisStyle, DEFAULT_BOTTOM_TICKS};
use crate::scale::DegeneratePolicy;
use crate::svg::ChartColor;

/// Space between a panel's outer box and its plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(40.0)
    }
}

/// Panel size and grid arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    /// Outer width of one panel, margins included
    pub width: f64,
    /// Outer height of one panel, margins included
    pub height: f64,
    pub margin: Margin,
    /// Panels per grid row
    pub columns: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 260.0,
            margin: Margin::default(),
            columns: 2,
        }
    }
}

impl Layout {
    /// Width of the plot area inside the margins.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the plot area inside the margins.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

/// How the time axis is shared between panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XDomainPolicy {
    /// One date extent across every valid series.
    #[default]
    Shared,
    /// Each panel spans its own dates.
    Independent,
}

/// How the value axis is shared between panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub enum YDomainPolicy {
    /// One value extent across every valid series.
    #[default]
    Shared,
    /// Each panel spans its own values.
    Independent,
    /// The same explicit domain for every panel.
    Fixed { min: f64, max: f64 },
}

/// Paint and stroke settings for the band, line and frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelStyle {
    /// Values above this are painted with `above`, values below with `below`.
    /// Without a threshold everything uses `above`.
    pub threshold: Option<f64>,
    pub above: ChartColor,
    pub below: ChartColor,
    pub band_opacity: f64,
    pub band_stroke_width: f64,
    pub line_stroke_width: f64,
    /// Radius of a marker at each central value; `0` draws none
    pub dot_radius: f64,
    pub frame: ChartColor,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            threshold: Some(1.0),
            above: ChartColor::css_var("above", "#eb5757"),
            below: ChartColor::css_var("below", "#27ae60"),
            band_opacity: 0.08,
            band_stroke_width: 3.0,
            line_stroke_width: 1.5,
            dot_radius: 0.0,
            frame: ChartColor::css_var("frame", "#eeeeee"),
        }
    }
}

/// Everything that affects derived scales and paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub layout: Layout,
    pub x_domain: XDomainPolicy,
    pub y_domain: YDomainPolicy,
    /// Overrides the start of every x domain
    pub x_start: Option<NaiveDateTime>,
    /// Overrides the end of every x domain
    pub x_end: Option<NaiveDateTime>,
    pub degenerate: DegeneratePolicy,
    /// Round y domains outward to tick multiples (ignored for fixed domains)
    pub nice_y: bool,
    pub left_ticks: usize,
    pub bottom_ticks: usize,
    pub axis_style: AxisStyle,
    pub style: PanelStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            x_domain: XDomainPolicy::default(),
            y_domain: YDomainPolicy::default(),
            x_start: None,
            x_end: None,
            degenerate: DegeneratePolicy::default(),
            nice_y: true,
            left_ticks: 5,
            bottom_ticks: DEFAULT_BOTTOM_TICKS,
            axis_style: AxisStyle::default(),
            style: PanelStyle::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_x_domain(mut self, policy: XDomainPolicy) -> Self {
        self.x_domain = policy;
        self
    }

    #[must_use]
    pub fn with_y_domain(mut self, policy: YDomainPolicy) -> Self {
        self.y_domain = policy;
        self
    }

    #[must_use]
    pub fn with_degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_x_start(mut self, start: NaiveDateTime) -> Self {
        self.x_start = Some(start);
        self
    }
}
