//! Payroll error types.

use rust_decimal::Decimal;
use thiserror::Error;
use tally_shared::AppError;

/// Errors that can occur during payroll processing.
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Employee code and name are required.
    #[error("Employee code and name are required")]
    MissingEmployee,

    /// A pay rate or hour count is negative.
    #[error("Pay rates and hours must not be negative")]
    NegativeRate,

    /// Payroll was run with no employees on file.
    #[error("No employees on file; add employees before running payroll")]
    NoEmployees,

    /// Deductions exceed gross pay for an employee.
    #[error("Deductions exceed gross pay for {employee}: net {net}")]
    NegativeNetPay {
        /// Employee whose pay went negative.
        employee: String,
        /// The negative net amount.
        net: Decimal,
    },
}

impl From<PayrollError> for AppError {
    fn from(err: PayrollError) -> Self {
        match err {
            PayrollError::NoEmployees => Self::NotReady(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
