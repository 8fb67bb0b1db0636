//! Shape generators: pure functions from ordered data to path geometry.
//!
//! Gap policy (shared by every generator): a datum whose derived coordinate
//! is not finite is skipped and the path is broken there, so the data on
//! either side render as disjoint segments.

mod area;
mod dots;
mod line;

use std::fmt::Write;

pub use area::AreaGenerator;
pub use dots::DotGenerator;
pub use line::LineGenerator;

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Straight-segment polyline, possibly broken into disjoint segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinePath {
    pub segments: Vec<Vec<Point>>,
}

impl LinePath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All points across segments, in input order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter().flatten()
    }
}

/// One closed band: `upper` runs left to right, `lower` runs right to left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Band {
    pub upper: Vec<Point>,
    pub lower: Vec<Point>,
}

/// Filled area, one band per unbroken run of data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaPath {
    pub bands: Vec<Band>,
}

impl AreaPath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

/// Derived geometry handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSpec {
    Line(LinePath),
    Area(AreaPath),
}

impl PathSpec {
    /// SVG path data (`d` attribute). Empty geometry yields an empty string.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        match self {
            Self::Line(line) => {
                for segment in &line.segments {
                    push_polyline(&mut d, segment.iter());
                }
            }
            Self::Area(area) => {
                for band in &area.bands {
                    push_polyline(&mut d, band.upper.iter().chain(band.lower.iter()));
                    d.push_str(" Z");
                }
            }
        }
        d
    }
}

fn push_polyline<'a>(d: &mut String, points: impl Iterator<Item = &'a Point>) {
    for (i, p) in points.enumerate() {
        if i == 0 {
            if !d.is_empty() {
                d.push(' ');
            }
            let _ = write!(d, "M{},{}", p.x, p.y);
        } else {
            let _ = write!(d, " L{},{}", p.x, p.y);
        }
    }
}

impl From<LinePath> for PathSpec {
    fn from(path: LinePath) -> Self {
        Self::Line(path)
    }
}

impl From<AreaPath> for PathSpec {
    fn from(path: AreaPath) -> Self {
        Self::Area(path)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
