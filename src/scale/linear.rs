//! Continuous linear scale for numeric domains.

use super::ticks::{format_number, linear_ticks, tick_step};
use super::{DegeneratePolicy, Scale};
use crate::{ChartError, Result};

/// Linear mapping `[domain_min, domain_max] -> [range_min, range_max]`.
///
/// Endpoints map exactly: `map(domain_min) == range_min` and
/// `map(domain_max) == range_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    degenerate: bool,
}

impl LinearScale {
    /// Build a scale, rejecting zero-width domains.
    ///
    /// # Errors
    /// Returns `Domain` if the domain has zero width or any bound is not finite.
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Result<Self> {
        Self::with_policy(
            domain_min,
            domain_max,
            range_min,
            range_max,
            DegeneratePolicy::Reject,
        )
    }

    /// Build a scale with an explicit policy for zero-width domains.
    ///
    /// # Errors
    /// Returns `Domain` if any bound or the domain width is not finite, or if
    /// the domain has zero width under `DegeneratePolicy::Reject`.
    pub fn with_policy(
        domain_min: f64,
        domain_max: f64,
        range_min: f64,
        range_max: f64,
        policy: DegeneratePolicy,
    ) -> Result<Self> {
        if !(domain_min.is_finite() && domain_max.is_finite()) {
            return Err(ChartError::Domain(format!(
                "domain bounds must be finite, got [{domain_min}, {domain_max}]"
            )));
        }
        if !(domain_max - domain_min).is_finite() {
            return Err(ChartError::Domain(format!(
                "domain width overflows, got [{domain_min}, {domain_max}]"
            )));
        }
        if !(range_min.is_finite() && range_max.is_finite()) {
            return Err(ChartError::Domain(format!(
                "range bounds must be finite, got [{range_min}, {range_max}]"
            )));
        }

        #[allow(clippy::float_cmp)]
        let degenerate = domain_min == domain_max;
        if degenerate && policy == DegeneratePolicy::Reject {
            return Err(ChartError::Domain(format!(
                "zero-width domain [{domain_min}, {domain_max}]"
            )));
        }

        Ok(Self {
            domain: (domain_min, domain_max),
            range: (range_min, range_max),
            degenerate,
        })
    }

    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Whether this scale maps every input to the range midpoint.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Extend the domain outward to the nearest multiples of the tick step.
    ///
    /// Degenerate scales, and domains whose rounded bounds would not be
    /// finite, are returned unchanged.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        if self.degenerate {
            return self;
        }
        let (d0, d1) = self.domain;
        let Some(step) = tick_step(d0, d1, count).filter(|s| s.is_finite() && *s > 0.0) else {
            return self;
        };
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        let lo = (lo / step).floor() * step;
        let hi = (hi / step).ceil() * step;
        if !(lo.is_finite() && hi.is_finite() && (hi - lo).is_finite()) || lo >= hi {
            return self;
        }
        let domain = if d0 <= d1 { (lo, hi) } else { (hi, lo) };
        Self { domain, ..self }
    }

    fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        (value - d0) / (d1 - d0)
    }
}

impl Scale for LinearScale {
    type Value = f64;

    fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.degenerate {
            return f64::midpoint(r0, r1);
        }
        let t = self.normalize(value);
        r0.mul_add(1.0 - t, r1 * t)
    }

    fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        #[allow(clippy::float_cmp)]
        if self.degenerate || r0 == r1 {
            return d0;
        }
        let t = (pixel - r0) / (r1 - r0);
        d0.mul_add(1.0 - t, d1 * t)
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        if self.degenerate {
            return if count == 0 {
                Vec::new()
            } else {
                vec![self.domain.0]
            };
        }
        linear_ticks(self.domain.0, self.domain.1, count)
    }

    fn format_tick(&self, value: f64, count: usize) -> String {
        let step = tick_step(self.domain.0, self.domain.1, count).unwrap_or(1.0);
        format_number(value, step)
    }
}

#[cfg(test)]
#[path = "linear_tests.rs"]
mod tests;
