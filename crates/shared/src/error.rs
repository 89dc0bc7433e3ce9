//! Application-wide error types.
//!
//! Every failure in the system is recovered locally at the point of the
//! user action; nothing here is fatal to the running process. Errors carry
//! a severity so callers can distinguish hard validation failures from
//! warnings and informational conditions.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// How an error should be surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation aborted, no state was mutated.
    Error,
    /// Derived state is inconsistent but further entry is allowed.
    Warning,
    /// Nothing to show yet (e.g., a report requested before any data exists).
    Info,
}

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed validation; the operation was aborted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A business rule was violated.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Derived state is out of balance; entry may continue.
    #[error("Out of balance: {0}")]
    OutOfBalance(String),

    /// No data recorded yet for the requested view.
    #[error("Not ready: {0}")]
    NotReady(String),

    /// Input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error during export or import.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::OutOfBalance(_) => "OUT_OF_BALANCE",
            Self::NotReady(_) => "NOT_READY",
            Self::Parse(_) => "PARSE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns how this error should be presented.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Validation(_)
            | Self::BusinessRule(_)
            | Self::NotFound(_)
            | Self::Parse(_)
            | Self::Io(_)
            | Self::Internal(_) => Severity::Error,
            Self::OutOfBalance(_) => Severity::Warning,
            Self::NotReady(_) => Severity::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::BusinessRule(String::new()).error_code(),
            "BUSINESS_RULE_VIOLATION"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::OutOfBalance(String::new()).error_code(),
            "OUT_OF_BALANCE"
        );
        assert_eq!(AppError::NotReady(String::new()).error_code(), "NOT_READY");
        assert_eq!(AppError::Parse(String::new()).error_code(), "PARSE_ERROR");
        assert_eq!(AppError::Io(String::new()).error_code(), "IO_ERROR");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            AppError::Validation(String::new()).severity(),
            Severity::Error
        );
        assert_eq!(
            AppError::OutOfBalance(String::new()).severity(),
            Severity::Warning
        );
        assert_eq!(AppError::NotReady(String::new()).severity(), Severity::Info);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::NotReady("msg".into()).to_string(),
            "Not ready: msg"
        );
        assert_eq!(
            AppError::OutOfBalance("msg".into()).to_string(),
            "Out of balance: msg"
        );
    }
}
