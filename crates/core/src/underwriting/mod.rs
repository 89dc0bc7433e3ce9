//! Loan underwriting threshold evaluation.
//!
//! Evaluates a small fixed set of ratios (DTI, LTV) and a credit score
//! against configured thresholds and produces an approve/deny decision,
//! reporting every violated threshold individually.

pub mod error;
pub mod service;
pub mod types;

pub use error::UnderwritingError;
pub use service::UnderwritingService;
pub use types::{
    ApplicationStatus, Decision, Evaluation, LoanApplication, LoanMetrics, LoanType,
    ThresholdViolation,
};
