//! Financial reports derived from the ledger.

pub mod service;
pub mod types;

pub use service::ReportService;
pub use types::{
    AccountBalanceRow, BalanceSheetReport, IncomeStatementReport, Section, SectionRow,
    TrialBalanceReport, TrialBalanceTotals,
};
