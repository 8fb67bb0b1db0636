//! Dataset model: observations grouped into ordered series.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{ChartError, Result};

/// A single dated value with its uncertainty band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDateTime,
    pub central: f64,
    pub low: f64,
    pub high: f64,
}

impl Observation {
    #[must_use]
    pub const fn new(date: NaiveDateTime, central: f64, low: f64, high: f64) -> Self {
        Self {
            date,
            central,
            low,
            high,
        }
    }

    /// Whether `low <= central <= high` holds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.low <= self.central && self.central <= self.high
    }
}

/// One logical line/band, e.g. one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub label: String,
    pub observations: Vec<Observation>,
}

impl Series {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        observations: Vec<Observation>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            observations,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Most recent observation (observations are sorted by date).
    #[must_use]
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Check the series can be charted: non-empty, sorted by date and with
    /// every band's low value at most its high value.
    ///
    /// Observations whose central value lies outside their band are logged but accepted.
    ///
    /// # Errors
    /// Returns `EmptySeries` for a series without observations, `UnsortedSeries`
    /// when a date is earlier than its predecessor and `InvalidBand` for the
    /// first observation whose low value exceeds its high value.
    pub fn validate(&self) -> Result<()> {
        if self.observations.is_empty() {
            return Err(ChartError::EmptySeries(format!("series '{}'", self.id)));
        }

        if let Some(index) = self
            .observations
            .windows(2)
            .position(|pair| pair[1].date < pair[0].date)
        {
            return Err(ChartError::UnsortedSeries {
                id: self.id.clone(),
                index: index + 1,
            });
        }

        if let Some((index, obs)) = self
            .observations
            .iter()
            .enumerate()
            .find(|(_, obs)| obs.low > obs.high)
        {
            return Err(ChartError::InvalidBand {
                index,
                low: obs.low,
                high: obs.high,
            });
        }

        for (index, obs) in self.observations.iter().enumerate() {
            if obs.low <= obs.high && !obs.is_consistent() {
                warn!(
                    series = %self.id,
                    index,
                    central = obs.central,
                    "central value lies outside its band"
                );
            }
        }

        Ok(())
    }
}

/// Explicit ordering applied by the caller before charting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesOrder {
    /// Keep the order the series were supplied in.
    #[default]
    AsGiven,
    /// Sort by display label.
    Label,
    /// Sort by identifier.
    Id,
    /// Highest latest central value first.
    LatestCentral,
}

/// Ordered collection of series, immutable for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub series: Vec<Series>,
}

impl Dataset {
    #[must_use]
    pub const fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Return a copy of the dataset with series arranged by `order`.
    ///
    /// Sorting is stable, so ties keep their supplied order.
    #[must_use]
    pub fn ordered(&self, order: SeriesOrder) -> Self {
        let mut series = self.series.clone();
        match order {
            SeriesOrder::AsGiven => {}
            SeriesOrder::Label => series.sort_by(|a, b| a.label.cmp(&b.label)),
            SeriesOrder::Id => series.sort_by(|a, b| a.id.cmp(&b.id)),
            SeriesOrder::LatestCentral => series.sort_by(|a, b| {
                let a = a.latest().map(|o| o.central);
                let b = b.latest().map(|o| o.central);
                match (a, b) {
                    (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }),
        }
        Self { series }
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
