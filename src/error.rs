//! Error types for the Net Pay Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate tables or
//! validating caller-supplied input at the presentation boundary.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Net Pay Calculation Engine.
///
/// The calculation itself is total on its numeric domain and never fails;
/// errors only arise from configuration loading and from the input
/// validation performed before a calculation is requested.
///
/// # Example
///
/// ```
/// use netpay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate table is effective for the given date.
    #[error("No rate table effective on date {date}")]
    RateTableNotFound {
        /// The date for which a rate table was requested.
        date: NaiveDate,
    },

    /// A rate table failed validation after parsing.
    #[error("Invalid rate table effective {effective_date}: {message}")]
    InvalidRateTable {
        /// The effective date of the offending table.
        effective_date: NaiveDate,
        /// A description of what made the table invalid.
        message: String,
    },

    /// A compensation input field was invalid.
    #[error("Invalid compensation field '{field}': {message}")]
    InvalidCompensation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
