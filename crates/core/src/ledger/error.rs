//! Ledger error types for validation and state errors.

use rust_decimal::Decimal;
use thiserror::Error;
use tally_shared::types::TransactionId;
use tally_shared::AppError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Debit and credit accounts must be different.
    #[error("Debit and credit accounts must be different: {0}")]
    SameAccount(String),

    /// Amounts must be positive.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Debit amount differs from credit amount (strict mode only).
    #[error("Debits must equal credits: debit {debit} != credit {credit}")]
    UnbalancedEntry {
        /// Debit line amount.
        debit: Decimal,
        /// Credit line amount.
        credit: Decimal,
    },

    /// Account name already registered in the chart.
    #[error("Duplicate account name: {0}")]
    DuplicateAccount(String),

    /// Account type string was not recognized.
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),

    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// Amount field could not be parsed as a number.
    ///
    /// Recovered locally: the caller reports the error and resets the
    /// field to zero.
    #[error("Malformed amount: {0:?}")]
    MalformedAmount(String),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::TransactionNotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::MalformedAmount(_) => Self::Parse(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_shared::Severity;

    #[test]
    fn test_error_display() {
        let err = LedgerError::UnbalancedEntry {
            debit: dec!(100.00),
            credit: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Debits must equal credits: debit 100.00 != credit 50.00"
        );
    }

    #[test]
    fn test_app_error_conversion() {
        let app: AppError = LedgerError::SameAccount("Cash".into()).into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");
        assert_eq!(app.severity(), Severity::Error);

        let app: AppError = LedgerError::TransactionNotFound(TransactionId::new()).into();
        assert_eq!(app.error_code(), "NOT_FOUND");

        let app: AppError = LedgerError::MalformedAmount("12x".into()).into();
        assert_eq!(app.error_code(), "PARSE_ERROR");
    }
}
