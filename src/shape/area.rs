//! Area (band) generator.

use super::{AreaPath, Band, Point};
use crate::{ChartError, Result};

fn identity(value: f64) -> f64 {
    value
}

/// Builds an [`AreaPath`] between a low and a high accessor.
///
/// The band check (`low <= high`) runs on the accessor outputs; the optional
/// projection then maps those values to pixels, so an inverted pixel range
/// (SVG y grows downward) does not trip the check.
#[derive(Debug, Clone, Copy)]
pub struct AreaGenerator<FX, FL, FH, P = fn(f64) -> f64> {
    x: FX,
    low: FL,
    high: FH,
    projection: P,
}

impl<FX, FL, FH> AreaGenerator<FX, FL, FH> {
    #[must_use]
    pub fn new(x: FX, low: FL, high: FH) -> Self {
        Self {
            x,
            low,
            high,
            projection: identity,
        }
    }
}

impl<FX, FL, FH, P> AreaGenerator<FX, FL, FH, P> {
    /// Map band values to pixels after the band check.
    #[must_use]
    pub fn with_projection<Q>(self, projection: Q) -> AreaGenerator<FX, FL, FH, Q>
    where
        Q: Fn(f64) -> f64,
    {
        AreaGenerator {
            x: self.x,
            low: self.low,
            high: self.high,
            projection,
        }
    }

    /// Generate the closed band(s).
    ///
    /// # Errors
    /// Returns `InvalidBand` for the first datum whose low value exceeds its high value.
    pub fn generate<T>(&self, data: &[T]) -> Result<AreaPath>
    where
        FX: Fn(&T) -> f64,
        FL: Fn(&T) -> f64,
        FH: Fn(&T) -> f64,
        P: Fn(f64) -> f64,
    {
        let mut bands = Vec::new();
        let mut current = Band::default();

        for (index, datum) in data.iter().enumerate() {
            let x = (self.x)(datum);
            let low = (self.low)(datum);
            let high = (self.high)(datum);

            if !(x.is_finite() && low.is_finite() && high.is_finite()) {
                close_band(&mut bands, &mut current);
                continue;
            }
            if low > high {
                return Err(ChartError::InvalidBand { index, low, high });
            }

            current.upper.push(Point::new(x, (self.projection)(high)));
            current.lower.push(Point::new(x, (self.projection)(low)));
        }
        close_band(&mut bands, &mut current);

        Ok(AreaPath { bands })
    }
}

fn close_band(bands: &mut Vec<Band>, current: &mut Band) {
    if current.upper.is_empty() {
        return;
    }
    let mut band = std::mem::take(current);
    band.lower.reverse();
    bands.push(band);
}

#[cfg(test)]
#[path = "area_tests.rs"]
mod tests;
