//! Small-multiples band charts: scales and shape generators compute geometry,
//! a declarative SVG layer renders it.

pub mod axis;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod memo;
pub mod scale;
pub mod shape;
pub mod svg;
pub mod tooltip;

#[cfg(test)]
mod test_fixtures;

pub use error::{ChartError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SERIES_OMITTED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
