//! Scales: pure mappings from a data domain to a pixel range.
//!
//! Two kinds are provided, both monotonic and invertible within their range:
//! - [`LinearScale`] for numeric values
//! - [`TemporalScale`] for dates
//!
//! Both produce "nice" tick values (1/2/5 × 10^n steps for numbers,
//! calendar-friendly intervals for dates) and format them for axis labels.

mod linear;
mod temporal;
mod ticks;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{ChartError, Result};

pub use linear::LinearScale;
pub use temporal::TemporalScale;
pub use ticks::{format_number, linear_ticks, tick_step};

/// What to do when a scale is built over a zero-width domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegeneratePolicy {
    /// Fail with a domain error.
    #[default]
    Reject,
    /// Map every input to the midpoint of the range.
    Constant,
}

/// A mapping from domain values to pixels.
pub trait Scale {
    type Value: Copy;

    /// Map a domain value to a pixel position.
    fn map(&self, value: Self::Value) -> f64;

    /// Recover the domain value for a pixel position.
    fn invert(&self, pixel: f64) -> Self::Value;

    /// Output pixel range as `(range_min, range_max)`.
    fn range(&self) -> (f64, f64);

    /// Nice tick values spanning the domain, about `count` of them.
    fn ticks(&self, count: usize) -> Vec<Self::Value>;

    /// Label for a tick produced by `ticks(count)`.
    fn format_tick(&self, value: Self::Value, count: usize) -> String;
}

/// Minimum and maximum of `values`, ignoring NaN.
///
/// # Errors
/// Returns `EmptySeries` when no comparable value is present.
pub fn extent<I>(values: I) -> Result<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .ok_or_else(|| ChartError::EmptySeries("a value extent".to_string()))
}

/// Earliest and latest of `dates`.
///
/// # Errors
/// Returns `EmptySeries` for an empty iterator.
pub fn time_extent<I>(dates: I) -> Result<(NaiveDateTime, NaiveDateTime)>
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    dates
        .into_iter()
        .fold(None, |acc: Option<(NaiveDateTime, NaiveDateTime)>, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
        .ok_or_else(|| ChartError::EmptySeries("a date extent".to_string()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
