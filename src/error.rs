//! Error types for loading records and the few computations that can reject input

use thiserror::Error;

/// Errors raised by the planning core
///
/// Zero or missing numeric data never produces an error; those cases resolve
/// to documented fallback values inside each calculation.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Month key that is not a valid `YYYY-MM-DD` date
    #[error("invalid month key '{0}': expected YYYY-MM-01")]
    InvalidMonthKey(String),

    /// Calendar date that could not be parsed
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Enumerated field holding a value outside its known set
    #[error("unknown {field} value '{value}'")]
    UnknownVariant { field: &'static str, value: String },

    /// Inflation of -100% or below leaves the Fisher relation undefined
    #[error("inflation rate of {0}% makes the real return undefined")]
    DegenerateInflation(f64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
