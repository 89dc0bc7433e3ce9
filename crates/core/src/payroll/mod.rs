//! Payroll processing: gross pay, withholdings, and the double-entry
//! journal impact of a payroll run.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::PayrollError;
pub use service::PayrollService;
pub use types::{Employee, PayType, PayrollRecord};
