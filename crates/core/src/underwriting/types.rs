//! Underwriting domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::ApplicationId;

/// Loan product classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// Long-term loan for property purchase (mortgage).
    Housing,
    /// Medium-term loan for vehicle purchase.
    Car,
    /// Personal loan, uncollateralized.
    Personal,
}

impl std::fmt::Display for LoanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Housing => write!(f, "Housing Loan"),
            Self::Car => write!(f, "Car Loan"),
            Self::Personal => write!(f, "Personal Loan"),
        }
    }
}

/// Application status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; a disbursement entry has been journaled.
    Approved,
    /// Denied.
    Denied,
}

impl ApplicationStatus {
    /// Returns true if the application still awaits a decision.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A loan application under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanApplication {
    /// Unique identifier.
    pub id: ApplicationId,
    /// Applicant reference code (e.g. "APP001").
    pub applicant_code: String,
    /// Applicant name.
    pub applicant_name: String,
    /// Loan product.
    pub loan_type: LoanType,
    /// Monthly gross income.
    pub monthly_income: Decimal,
    /// Existing monthly debt payments.
    pub existing_debt_payments: Decimal,
    /// Credit score (300-850).
    pub credit_score: u16,
    /// Requested principal.
    pub loan_amount: Decimal,
    /// Term in years.
    pub term_years: u32,
    /// Annual interest rate in percent (e.g. 4.0).
    pub annual_rate: Decimal,
    /// Collateral value; zero means no collateral.
    pub asset_value: Decimal,
    /// Date the application was submitted.
    pub date_submitted: NaiveDate,
    /// Current status.
    pub status: ApplicationStatus,
}

impl LoanApplication {
    /// Term length in months.
    #[must_use]
    pub fn term_months(&self) -> u32 {
        self.term_years * 12
    }

    /// Returns true if collateral backs this loan.
    #[must_use]
    pub fn has_collateral(&self) -> bool {
        self.asset_value > Decimal::ZERO
    }
}

/// Ratios computed for one application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanMetrics {
    /// Amortized monthly payment for the requested loan.
    pub monthly_payment: Decimal,
    /// Debt-to-income ratio in percent.
    pub dti: Decimal,
    /// Loan-to-value ratio in percent; `None` without collateral.
    pub ltv: Option<Decimal>,
}

/// A threshold the application failed, with the actual value and limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ThresholdViolation {
    /// DTI ratio exceeds the configured maximum.
    DtiExceeded {
        /// Computed DTI in percent.
        actual: Decimal,
        /// Configured maximum in percent.
        max: Decimal,
    },
    /// LTV ratio exceeds the configured maximum.
    LtvExceeded {
        /// Computed LTV in percent.
        actual: Decimal,
        /// Configured maximum in percent.
        max: Decimal,
    },
    /// Credit score is below the configured minimum.
    CreditScoreBelow {
        /// Applicant's score.
        actual: u16,
        /// Configured minimum.
        min: u16,
    },
}

impl std::fmt::Display for ThresholdViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DtiExceeded { actual, max } => {
                write!(f, "DTI ratio ({actual}%) exceeds threshold ({max}%)")
            }
            Self::LtvExceeded { actual, max } => {
                write!(f, "LTV ratio ({actual}%) exceeds threshold ({max}%)")
            }
            Self::CreditScoreBelow { actual, min } => {
                write!(f, "Credit score ({actual}) below threshold ({min})")
            }
        }
    }
}

/// The underwriting decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// All thresholds passed.
    Approve,
    /// One or more thresholds violated.
    Deny,
}

/// Result of evaluating one application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Computed ratios.
    pub metrics: LoanMetrics,
    /// Every violated threshold (not just the first).
    pub violations: Vec<ThresholdViolation>,
    /// Approve iff no violations.
    pub decision: Decision,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_type_display() {
        assert_eq!(LoanType::Housing.to_string(), "Housing Loan");
        assert_eq!(LoanType::Personal.to_string(), "Personal Loan");
    }

    #[test]
    fn test_violation_display() {
        let violation = ThresholdViolation::DtiExceeded {
            actual: dec!(48.5),
            max: dec!(43),
        };
        assert_eq!(
            violation.to_string(),
            "DTI ratio (48.5%) exceeds threshold (43%)"
        );
    }

    #[test]
    fn test_status_is_pending() {
        assert!(ApplicationStatus::Pending.is_pending());
        assert!(!ApplicationStatus::Approved.is_pending());
        assert!(!ApplicationStatus::Denied.is_pending());
    }
}
