//! Line generator.

use super::{LinePath, Point};

/// Builds a [`LinePath`] from data using x and y accessors.
///
/// Accessors usually compose a field lookup with a scale, e.g.
/// `|o: &Observation| x_scale.map(o.date)`.
#[derive(Debug, Clone, Copy)]
pub struct LineGenerator<FX, FY> {
    x: FX,
    y: FY,
}

impl<FX, FY> LineGenerator<FX, FY> {
    #[must_use]
    pub const fn new(x: FX, y: FY) -> Self {
        Self { x, y }
    }

    /// Generate the path, preserving input order.
    ///
    /// Data with a non-finite x or y break the line into a new segment.
    pub fn generate<T>(&self, data: &[T]) -> LinePath
    where
        FX: Fn(&T) -> f64,
        FY: Fn(&T) -> f64,
    {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for datum in data {
            let (x, y) = ((self.x)(datum), (self.y)(datum));
            if x.is_finite() && y.is_finite() {
                current.push(Point::new(x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        LinePath { segments }
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
