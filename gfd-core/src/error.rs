/// Error types for chart construction and data lookups.
use thiserror::Error;

/// Main error type for dashboard chart operations.
///
/// All variants are deterministic and detectable before a figure is built;
/// the presentation layer maps any of them to a placeholder chart instead of
/// crashing the page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A (year, country, metric) triple is absent from the panel table
    #[error("no value for ({year}, {country}, {metric})")]
    KeyMissing {
        year: i32,
        country: String,
        metric: String,
    },

    /// A control value outside the enumerated metric set
    #[error("unknown metric: {0}")]
    InvalidMetric(String),

    /// A control value outside the exchange table's date index
    #[error("unknown date: {0}")]
    InvalidDate(String),

    /// Underlying data access failed (database or parse error)
    #[error("data access failed: {0}")]
    Data(String),
}

/// Type alias for Results using ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
