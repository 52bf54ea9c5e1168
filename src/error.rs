//! Centralized error types for mimefield.

use std::num::ParseIntError;

use thiserror::Error;

/// All errors produced while parsing a header field value.
///
/// Unrecognized `Content-Transfer-Encoding` or `Importance` tokens are not
/// errors: those parsers substitute a default instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The header was looked up but carried no value at all.
    #[error("No value supplied for header field '{field}'")]
    MissingValue { field: String },

    /// A Content-Disposition parameter outside the recognized set that is not
    /// an `X-` extension.
    #[error("Unrecognized Content-Disposition parameter: {0}")]
    UnrecognizedParameter(String),

    /// A date parameter that could not be parsed as an RFC 2822 date-time.
    #[error("Invalid date-time value: '{value}'")]
    InvalidDate { value: String },

    /// A size parameter that is not a non-negative decimal integer.
    #[error("Invalid size value '{value}': {source}")]
    InvalidSize {
        value: String,
        source: ParseIntError,
    },
}

/// Convenience alias for `Result<T, FieldError>`.
pub type Result<T> = std::result::Result<T, FieldError>;

impl FieldError {
    /// Create a `MissingValue` variant for the named header.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingValue {
            field: field.into(),
        }
    }
}
