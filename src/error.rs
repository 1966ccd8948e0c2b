//! Error types for the payroll computation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors are reserved for boundary misuse (invalid periods, malformed
//! configuration, inconsistent employee records); per-record problems inside
//! a computation degrade to warnings on the audit trail instead of failing
//! the whole period.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll computation engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
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

    /// A pay period was invalid (e.g. end date before start date).
    #[error("Invalid pay period {start_date}..{end_date}: {message}")]
    InvalidPeriod {
        /// The start date of the rejected period.
        start_date: NaiveDate,
        /// The end date of the rejected period.
        end_date: NaiveDate,
        /// A description of what made the period invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A time record was invalid in a way that cannot be degraded.
    #[error("Invalid time record for {date}: {message}")]
    InvalidTimeRecord {
        /// The date the record applies to.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A general computation error occurred.
    #[error("Computation error: {message}")]
    ComputationError {
        /// A description of the computation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
