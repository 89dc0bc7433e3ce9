//! Core bookkeeping logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `ledger` - Double-entry bookkeeping logic
//! - `period` - Date-range filtering
//! - `underwriting` - Loan threshold evaluation
//! - `cashflow` - Fixed-layout cash-flow template import
//! - `payroll` - Payroll runs and their journal impact
//! - `reports` - Trial balance, income statement, balance sheet
//! - `export` - Delimited export/import and text statements
//! - `session` - Session-scoped application state

pub mod cashflow;
pub mod export;
pub mod ledger;
pub mod payroll;
pub mod period;
pub mod reports;
pub mod session;
pub mod underwriting;
