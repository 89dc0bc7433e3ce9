//! Underwriting error types.

use thiserror::Error;
use tally_shared::types::ApplicationId;
use tally_shared::AppError;

/// Errors that can occur during underwriting operations.
#[derive(Debug, Error)]
pub enum UnderwritingError {
    /// Applicant code and name are required.
    #[error("Applicant code and name are required")]
    MissingApplicant,

    /// Loan term must be at least one month.
    #[error("Loan term must be at least one month")]
    ZeroTerm,

    /// Application not found.
    #[error("Application not found: {0}")]
    ApplicationNotFound(ApplicationId),

    /// Application already has a decision.
    #[error("Application {0} has already been decided")]
    AlreadyDecided(ApplicationId),
}

impl From<UnderwritingError> for AppError {
    fn from(err: UnderwritingError) -> Self {
        match err {
            UnderwritingError::ApplicationNotFound(_) => Self::NotFound(err.to_string()),
            UnderwritingError::AlreadyDecided(_) => Self::BusinessRule(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
