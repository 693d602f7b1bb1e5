//! Custom error types for ledger-report
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger-report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record lacks a field that entry construction requires
    #[error("Record is missing required field '{field}': {record}")]
    MissingField { field: &'static str, record: String },

    /// A record date that is not a calendar date
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// A record value that cannot be held as an amount
    #[error("Invalid value {value}: {reason}")]
    InvalidValue { value: String, reason: String },

    /// A running total left the representable range
    #[error("Amount overflow: {0}")]
    Overflow(String),

    /// An option value outside its recognized set
    #[error("Unknown {option} '{value}'")]
    UnknownOption { option: &'static str, value: String },

    /// Records file errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReportError {
    /// Create a "missing field" error for a record
    pub fn missing_field(field: &'static str, record: impl std::fmt::Debug) -> Self {
        Self::MissingField {
            field,
            record: format!("{:?}", record),
        }
    }

    /// Create an "invalid value" error for a record amount
    pub fn invalid_value(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an "unknown option" error
    pub fn unknown_option(option: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            option,
            value: value.into(),
        }
    }

    /// Check if this is a missing field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Check if this is an invalid value error
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for ledger-report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_field_error() {
        let err = ReportError::missing_field("value", "groceries");
        assert_eq!(
            err.to_string(),
            "Record is missing required field 'value': \"groceries\""
        );
        assert!(err.is_missing_field());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ReportError::invalid_value(f64::NAN, "not a finite number");
        assert_eq!(err.to_string(), "Invalid value NaN: not a finite number");
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_unknown_option_error() {
        let err = ReportError::unknown_option("entry sort key", "size");
        assert_eq!(err.to_string(), "Unknown entry sort key 'size'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }
}
