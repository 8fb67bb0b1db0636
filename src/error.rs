use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid scale domain: {0}")]
    Domain(String),

    #[error("Invalid band at index {index}: low {low} is greater than high {high}")]
    InvalidBand { index: usize, low: f64, high: f64 },

    #[error("Cannot derive {0} from an empty series")]
    EmptySeries(String),

    #[error("Series '{id}' is not sorted by date at index {index}")]
    UnsortedSeries { id: String, index: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date '{value}'")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    /// Short machine-friendly name of the error kind, used in placeholders and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Domain(_) => "domain",
            Self::InvalidBand { .. } => "invalid-band",
            Self::EmptySeries(_) => "empty-series",
            Self::UnsortedSeries { .. } => "unsorted-series",
            Self::Config(_) => "config",
            Self::FileRead { .. } | Self::Io(_) => "io",
            Self::DateParse { .. } => "date",
            Self::TomlParse(_) => "toml",
            Self::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
