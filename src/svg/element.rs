//! Primitive SVG elements: rules, text, paths, rectangles, circles and gradients.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A straight line segment (gridlines, tooltip rules, ticks).
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub opacity: f64,
    pub dash: Option<String>,
}

impl Rule {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: ChartColor) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            color,
            stroke_width: 1.0,
            opacity: 1.0,
            dash: None,
        }
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, pattern: impl Into<String>) -> Self {
        self.dash = Some(pattern.into());
        self
    }
}

impl SvgElement for Rule {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
            self.x1,
            self.y1,
            self.x2,
            self.y2,
            self.color.to_css(),
            self.stroke_width
        );
        #[allow(clippy::float_cmp)]
        if self.opacity != 1.0 {
            let _ = write!(output, r#" opacity="{}""#, self.opacity);
        }
        if let Some(dash) = &self.dash {
            let _ = write!(output, r#" stroke-dasharray="{}""#, html_escape(dash));
        }
        output.push_str("/>");
        output
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: TextAnchor,
    pub color: ChartColor,
    pub font_size: f64,
    pub bold: bool,
    /// Baseline shift in `em`, e.g. `0.32` to center on `y`
    pub dy_em: Option<f64>,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: TextAnchor::Start,
            color: ChartColor::css_var("text", "#333333"),
            font_size: 12.0,
            bold: false,
            dy_em: None,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn with_dy_em(mut self, dy: f64) -> Self {
        self.dy_em = Some(dy);
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}""#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size
        );
        if let Some(dy) = self.dy_em {
            let _ = write!(output, r#" dy="{dy}em""#);
        }
        if self.bold {
            output.push_str(r#" font-weight="bold""#);
        }
        let _ = write!(output, ">{}</text>", html_escape(&self.content));
        output
    }
}

/// A path given by its SVG `d` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    pub d: String,
    pub fill: ChartColor,
    pub stroke: ChartColor,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl PathElement {
    /// Unfilled stroked path (line charts).
    #[must_use]
    pub fn stroked(d: impl Into<String>, stroke: ChartColor, stroke_width: f64) -> Self {
        Self {
            d: d.into(),
            fill: ChartColor::None,
            stroke,
            stroke_width,
            opacity: 1.0,
        }
    }

    /// Filled path (area bands).
    #[must_use]
    pub fn filled(d: impl Into<String>, fill: ChartColor) -> Self {
        Self {
            d: d.into(),
            fill,
            stroke: ChartColor::None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: ChartColor, width: f64) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

impl SvgElement for PathElement {
    fn render(&self) -> String {
        if self.d.is_empty() {
            return String::new();
        }
        let mut output = format!(
            r#"<path d="{}" fill="{}" stroke="{}""#,
            self.d,
            self.fill.to_css(),
            self.stroke.to_css()
        );
        if self.stroke != ChartColor::None {
            let _ = write!(
                output,
                r#" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
                self.stroke_width
            );
        }
        #[allow(clippy::float_cmp)]
        if self.opacity != 1.0 {
            let _ = write!(output, r#" opacity="{}""#, self.opacity);
        }
        output.push_str("/>");
        output
    }
}

/// An axis-aligned rectangle (panel frames, hover zones).
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: ChartColor,
    pub stroke: ChartColor,
    /// Accessible title, also shown as a hover tooltip
    pub title: Option<String>,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: ChartColor::None,
            stroke: ChartColor::None,
            title: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: ChartColor) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: ChartColor) -> Self {
        self.stroke = stroke;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let open = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}""#,
            self.x,
            self.y,
            self.width,
            self.height,
            self.fill.to_css(),
            self.stroke.to_css()
        );
        match &self.title {
            // Transparent hover targets still need pointer events
            Some(title) => format!(
                "{open} pointer-events=\"all\">\n    <title>{}</title>\n</rect>",
                html_escape(title)
            ),
            None => format!("{open}/>"),
        }
    }
}

/// A circle marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: ChartColor,
    pub title: Option<String>,
}

impl Circle {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, r: f64, fill: ChartColor) -> Self {
        Self {
            cx,
            cy,
            r,
            fill,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl SvgElement for Circle {
    fn render(&self) -> String {
        let open = format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
            self.cx,
            self.cy,
            self.r,
            self.fill.to_css()
        );
        match &self.title {
            Some(title) => format!(
                "{open}>\n    <title>{}</title>\n</circle>",
                html_escape(title)
            ),
            None => format!("{open}/>"),
        }
    }
}

/// A color stop inside a gradient; `offset` is in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: ChartColor,
}

/// Vertical linear gradient in user space, from `y1` (offset 0) to `y2` (offset 1).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub y1: f64,
    pub y2: f64,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    #[must_use]
    pub fn vertical(id: impl Into<String>, y1: f64, y2: f64) -> Self {
        Self {
            id: id.into(),
            y1,
            y2,
            stops: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: ChartColor) -> Self {
        self.stops.push(GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }
}

impl SvgElement for LinearGradient {
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="0" y1="{}" x2="0" y2="{}">"#,
            html_escape(&self.id),
            self.y1,
            self.y2
        );
        for stop in &self.stops {
            let _ = writeln!(
                output,
                r#"    <stop offset="{}" stop-color="{}"/>"#,
                stop.offset,
                stop.color.to_css()
            );
        }
        output.push_str("</linearGradient>");
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
