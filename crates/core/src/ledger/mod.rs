//! Double-entry bookkeeping logic.
//!
//! This module implements the core ledger functionality:
//! - Accounts and the chart of accounts
//! - Two-line transactions (one debit line, one credit line)
//! - Trial balance and balance-check calculations
//! - Running balance queries for time-series views
//! - Business rule validation
//! - Error types for ledger operations

pub mod account;
pub mod balance;
pub mod error;
pub mod ledger;
pub mod running;
pub mod transaction;
pub mod validation;

#[cfg(test)]
mod ledger_props;

pub use account::{Account, AccountType, ChartOfAccounts, NormalBalance};
pub use balance::{balance_tolerance, TrialBalance};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use running::{AccountRole, RunningBalances};
pub use transaction::Transaction;
pub use validation::{parse_amount, validate_transaction};
