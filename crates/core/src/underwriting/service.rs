//! Underwriting evaluation service.

use rust_decimal::{Decimal, MathematicalOps};
use tally_shared::config::UnderwritingSettings;

use super::error::UnderwritingError;
use super::types::{Decision, Evaluation, LoanApplication, LoanMetrics, ThresholdViolation};
use crate::ledger::Transaction;

/// Service for evaluating loan applications.
///
/// Pure business logic: thresholds come from configuration, state lives in
/// the session.
pub struct UnderwritingService;

impl UnderwritingService {
    /// Validates a submission before it enters the application store.
    ///
    /// # Errors
    ///
    /// Returns an error when the applicant code or name is blank, or the
    /// term is zero months.
    pub fn validate_submission(app: &LoanApplication) -> Result<(), UnderwritingError> {
        if app.applicant_code.trim().is_empty() || app.applicant_name.trim().is_empty() {
            return Err(UnderwritingError::MissingApplicant);
        }
        if app.term_months() == 0 {
            return Err(UnderwritingError::ZeroTerm);
        }
        Ok(())
    }

    /// Amortized monthly payment: `p * r / (1 - (1 + r)^-n)` with
    /// `r = annual rate / 1200`.
    ///
    /// A 0% rate degenerates to straight division (`p / n`); the naive
    /// formula divides by zero there.
    ///
    /// # Errors
    ///
    /// Returns `ZeroTerm` when `term_months` is zero.
    pub fn monthly_payment(
        principal: Decimal,
        annual_rate_pct: Decimal,
        term_months: u32,
    ) -> Result<Decimal, UnderwritingError> {
        if term_months == 0 {
            return Err(UnderwritingError::ZeroTerm);
        }
        let n = Decimal::from(term_months);
        if annual_rate_pct.is_zero() {
            return Ok((principal / n).round_dp(2));
        }
        let r = annual_rate_pct / Decimal::new(1200, 0);
        let growth = (Decimal::ONE + r).powi(i64::from(term_months));
        let payment = principal * r * growth / (growth - Decimal::ONE);
        Ok(payment.round_dp(2))
    }

    /// Computes DTI/LTV metrics for an application.
    ///
    /// DTI = (existing debt + proposed payment) / income x 100; an income
    /// of zero or less pegs DTI at 100, as the intake form does. LTV is
    /// only defined when collateral is present.
    ///
    /// # Errors
    ///
    /// Returns `ZeroTerm` for a zero-month term.
    pub fn metrics(app: &LoanApplication) -> Result<LoanMetrics, UnderwritingError> {
        let monthly_payment =
            Self::monthly_payment(app.loan_amount, app.annual_rate, app.term_months())?;

        let dti = if app.monthly_income > Decimal::ZERO {
            (app.existing_debt_payments + monthly_payment) / app.monthly_income
                * Decimal::ONE_HUNDRED
        } else {
            Decimal::ONE_HUNDRED
        };

        let ltv = app
            .has_collateral()
            .then(|| app.loan_amount / app.asset_value * Decimal::ONE_HUNDRED);

        Ok(LoanMetrics {
            monthly_payment,
            dti,
            ltv,
        })
    }

    /// Evaluates an application against the configured thresholds.
    ///
    /// Approve iff DTI and LTV (when collateral is present) are at or
    /// under their maxima and the credit score meets the minimum. Every
    /// violated threshold is reported, not just the first.
    ///
    /// # Errors
    ///
    /// Returns `ZeroTerm` for a zero-month term.
    pub fn evaluate(
        app: &LoanApplication,
        policy: &UnderwritingSettings,
    ) -> Result<Evaluation, UnderwritingError> {
        let metrics = Self::metrics(app)?;
        let mut violations = Vec::new();

        if metrics.dti > policy.max_dti {
            violations.push(ThresholdViolation::DtiExceeded {
                actual: metrics.dti.round_dp(2),
                max: policy.max_dti,
            });
        }
        if let Some(ltv) = metrics.ltv {
            if ltv > policy.max_ltv {
                violations.push(ThresholdViolation::LtvExceeded {
                    actual: ltv.round_dp(2),
                    max: policy.max_ltv,
                });
            }
        }
        if app.credit_score < policy.min_credit_score {
            violations.push(ThresholdViolation::CreditScoreBelow {
                actual: app.credit_score,
                min: policy.min_credit_score,
            });
        }

        let decision = if violations.is_empty() {
            Decision::Approve
        } else {
            Decision::Deny
        };

        Ok(Evaluation {
            metrics,
            violations,
            decision,
        })
    }

    /// Double-entry journal pair for disbursing an approved loan: debit
    /// Loans Receivable, credit Cash, for the loan amount.
    #[must_use]
    pub fn disbursement(app: &LoanApplication) -> Transaction {
        Transaction::new(
            app.date_submitted,
            format!("Loan disbursement - {}", app.applicant_name),
            "Loans Receivable",
            app.loan_amount,
            "Cash",
            app.loan_amount,
        )
        .with_category("Lending")
    }
}
