//! Shared test fixtures for dataset, scale and chart tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::dataset::{Dataset, Observation, Series};

/// Midnight of the given day in March 2020.
pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 3, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid March 2020 day")
}

/// Observation on day `d` of March 2020.
pub fn obs(d: u32, central: f64, low: f64, high: f64) -> Observation {
    Observation::new(day(d), central, low, high)
}

/// Series whose label is derived from its id.
pub fn series(id: &str, observations: Vec<Observation>) -> Series {
    Series::new(id, format!("Region {id}"), observations)
}

/// Two well-formed series sharing the same dates.
pub fn two_region_dataset() -> Dataset {
    Dataset::new(vec![
        series(
            "CA",
            vec![
                obs(2, 1.2, 0.9, 1.5),
                obs(3, 1.1, 0.8, 1.4),
                obs(4, 0.9, 0.7, 1.2),
            ],
        ),
        series(
            "NY",
            vec![
                obs(2, 2.0, 1.6, 2.4),
                obs(3, 1.8, 1.5, 2.2),
                obs(4, 1.5, 1.2, 1.9),
            ],
        ),
    ])
}
