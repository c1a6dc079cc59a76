//! Custom error types for ProfitFirst
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ProfitFirst operations
#[derive(Error, Debug)]
pub enum ProfitFirstError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A required bank detail is missing at setup
    #[error("Please fill in all fields for each account ({account}: {field} is empty)")]
    SetupIncomplete { account: String, field: String },

    /// The registry is needed but setup has not been completed
    #[error("Account setup has not been completed. Run 'profitfirst setup complete' first.")]
    SetupRequired,

    /// The registry is frozen and can no longer be edited
    #[error("Account setup is already complete. Run 'profitfirst setup reset' to edit accounts.")]
    SetupLocked,

    /// A call to the payment provider failed
    #[error("{operation} failed: {reason}")]
    ExternalRequestFailed {
        operation: &'static str,
        reason: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ProfitFirstError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a failed balance check error
    pub fn balance_failed(reason: impl Into<String>) -> Self {
        Self::ExternalRequestFailed {
            operation: "Balance check",
            reason: reason.into(),
        }
    }

    /// Create a failed transfer error
    pub fn transfer_failed(reason: impl Into<String>) -> Self {
        Self::ExternalRequestFailed {
            operation: "Transfer",
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the payment provider
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalRequestFailed { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ProfitFirstError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ProfitFirstError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ProfitFirstError {
    fn from(err: reqwest::Error) -> Self {
        let operation = if err.is_timeout() {
            "Request (timed out)"
        } else {
            "Request"
        };
        Self::ExternalRequestFailed {
            operation,
            reason: err.to_string(),
        }
    }
}

/// Result type alias for ProfitFirst operations
pub type ProfitFirstResult<T> = Result<T, ProfitFirstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProfitFirstError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ProfitFirstError::account_not_found("Savings");
        assert_eq!(err.to_string(), "Account not found: Savings");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_setup_incomplete_error() {
        let err = ProfitFirstError::SetupIncomplete {
            account: "GST".into(),
            field: "BSB".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all fields for each account (GST: BSB is empty)"
        );
    }

    #[test]
    fn test_external_error() {
        let err = ProfitFirstError::transfer_failed("HTTP 500");
        assert_eq!(err.to_string(), "Transfer failed: HTTP 500");
        assert!(err.is_external());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ProfitFirstError = io_err.into();
        assert!(matches!(err, ProfitFirstError::Io(_)));
    }
}
