//! Dataset files: JSON in list or keyed form.
//!
//! ```json
//! { "series": [ { "id": "CA", "label": "California", "observations": [
//!     { "date": "2020-03-02", "central": 1.2, "low": 0.9, "high": 1.5 } ] } ] }
//! ```
//!
//! The keyed form maps ids to series and keeps file order:
//! `{ "series": { "CA": { "label": "California", "observations": [...] } } }`.
//! A `null` value becomes a gap in the chart.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::dataset::{Dataset, Observation, Series};
use crate::{ChartError, Result};

#[derive(Debug, Deserialize)]
struct RawObservation {
    date: String,
    central: Option<f64>,
    low: Option<f64>,
    high: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawKeyedSeries {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSeriesSet {
    List(Vec<RawSeries>),
    Keyed(IndexMap<String, RawKeyedSeries>),
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    series: RawSeriesSet,
}

/// Parse a date as `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or RFC 3339.
///
/// RFC 3339 values are converted to UTC.
///
/// # Errors
/// Returns `DateParse` if no format matches.
pub fn parse_date(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN)),
        Err(source) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|at| at.naive_utc()))
            .ok_or_else(|| ChartError::DateParse {
                value: value.to_string(),
                source,
            }),
    }
}

fn convert_observations(raw: Vec<RawObservation>) -> Result<Vec<Observation>> {
    raw.into_iter()
        .map(|o| {
            Ok(Observation::new(
                parse_date(&o.date)?,
                o.central.unwrap_or(f64::NAN),
                o.low.unwrap_or(f64::NAN),
                o.high.unwrap_or(f64::NAN),
            ))
        })
        .collect()
}

/// Parse a dataset from JSON text.
///
/// # Errors
/// Returns `Json` for malformed JSON or an unrecognized layout and
/// `DateParse` for an unreadable date.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let raw: RawDataset = serde_json::from_str(json)?;
    let series = match raw.series {
        RawSeriesSet::List(list) => list
            .into_iter()
            .map(|s| {
                let label = s.label.unwrap_or_else(|| s.id.clone());
                Ok(Series::new(s.id, label, convert_observations(s.observations)?))
            })
            .collect::<Result<Vec<_>>>()?,
        RawSeriesSet::Keyed(map) => map
            .into_iter()
            .map(|(id, s)| {
                let label = s.label.unwrap_or_else(|| id.clone());
                Ok(Series::new(id, label, convert_observations(s.observations)?))
            })
            .collect::<Result<Vec<_>>>()?,
    };
    Ok(Dataset::new(series))
}

/// Read and parse a dataset file.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read, otherwise as [`parse_dataset`].
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path).map_err(|source| ChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&content)?;
    debug!(path = %path.display(), series = dataset.len(), "loaded dataset");
    Ok(dataset)
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
