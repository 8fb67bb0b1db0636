//! Domain resolution for the x and y scales of each panel.

use chrono::NaiveDateTime;

use super::options::{ChartOptions, XDomainPolicy, YDomainPolicy};
use crate::Result;
use crate::dataset::Series;
use crate::scale::{extent, time_extent};

/// Extents shared by every panel of one render pass.
///
/// `None` means the extent is derived per panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SharedDomains {
    pub x: Option<(NaiveDateTime, NaiveDateTime)>,
    pub y: Option<(f64, f64)>,
}

/// Values spanned by a series on the y axis: the band and the central line.
fn series_values(series: &Series) -> impl Iterator<Item = f64> + '_ {
    series
        .observations
        .iter()
        .flat_map(|o| [o.low, o.central, o.high])
}

fn series_dates(series: &Series) -> impl Iterator<Item = NaiveDateTime> + '_ {
    series.observations.iter().map(|o| o.date)
}

impl SharedDomains {
    /// Compute shared extents over the series that passed validation.
    ///
    /// With no valid series the shared extents stay unset; there is then no
    /// panel to draw them on.
    #[must_use]
    pub fn from_series(valid: &[&Series], options: &ChartOptions) -> Self {
        let x = match options.x_domain {
            XDomainPolicy::Shared => {
                time_extent(valid.iter().flat_map(|s| series_dates(s))).ok()
            }
            XDomainPolicy::Independent => None,
        };
        let y = match options.y_domain {
            YDomainPolicy::Shared => extent(valid.iter().flat_map(|s| series_values(s))).ok(),
            YDomainPolicy::Fixed { min, max } => Some((min, max)),
            YDomainPolicy::Independent => None,
        };
        Self { x, y }
    }

    /// X domain for one panel, with explicit start/end overrides applied.
    ///
    /// # Errors
    /// Returns `EmptySeries` when the series has no dates and nothing is shared.
    pub fn x_for(
        &self,
        series: &Series,
        options: &ChartOptions,
    ) -> Result<(NaiveDateTime, NaiveDateTime)> {
        let (start, end) = match self.x {
            Some(shared) => shared,
            None => time_extent(series_dates(series))?,
        };
        Ok((options.x_start.unwrap_or(start), options.x_end.unwrap_or(end)))
    }

    /// Y domain for one panel.
    ///
    /// # Errors
    /// Returns `EmptySeries` when the series has no comparable values and nothing is shared.
    pub fn y_for(&self, series: &Series) -> Result<(f64, f64)> {
        match self.y {
            Some(shared) => Ok(shared),
            None => extent(series_values(series)),
        }
    }
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod tests;
