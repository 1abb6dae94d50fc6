//! Error types for answer-core.
//!
//! The grading operations themselves are total; these errors only arise when
//! turning caller-supplied names and numbers into engine configuration.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing tolerance names or engine settings.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unknown tolerance level: {0}")]
    UnknownTolerance(String),

    #[error("{name} must be between 0.0 and 1.0, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("cloze mask must not be empty")]
    EmptyMask,
}
