//! Scatter (dot) generator.

use super::Point;

/// Places one point per datum; data with a non-finite coordinate are skipped.
#[derive(Debug, Clone, Copy)]
pub struct DotGenerator<FX, FY> {
    x: FX,
    y: FY,
}

impl<FX, FY> DotGenerator<FX, FY> {
    #[must_use]
    pub const fn new(x: FX, y: FY) -> Self {
        Self { x, y }
    }

    pub fn generate<T>(&self, data: &[T]) -> Vec<Point>
    where
        FX: Fn(&T) -> f64,
        FY: Fn(&T) -> f64,
    {
        data.iter()
            .map(|datum| Point::new((self.x)(datum), (self.y)(datum)))
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .collect()
    }
}

#[cfg(test)]
#[path = "dots_tests.rs"]
mod tests;
