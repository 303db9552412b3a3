//! Error types for the culture presentation site.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Surface has no drawable area: {width}x{height}")]
    EmptySurface { width: f64, height: f64 },

    #[error("Chart radius collapsed to {radius} after padding")]
    DegenerateGeometry { radius: f64 },

    #[error("Radar chart needs at least {required} categories, got {actual}")]
    TooFewCategories { required: usize, actual: usize },

    #[error("Duplicate category label: {0}")]
    DuplicateCategory(String),

    #[error("Series '{series}' has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("Radar chart has no series to draw")]
    NoSeries,

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Drawing surface error: {0}")]
    Surface(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Inputs that can never produce a chart. Rendering these is a no-op,
    /// not a failure worth reporting.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Error::EmptySurface { .. }
                | Error::DegenerateGeometry { .. }
                | Error::TooFewCategories { .. }
                | Error::DuplicateCategory(_)
                | Error::SeriesLengthMismatch { .. }
                | Error::NoSeries
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
