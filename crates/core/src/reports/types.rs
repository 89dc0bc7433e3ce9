//! Report data structures.
//!
//! Reports are plain values assembled by `ReportService`; they hold no
//! references into the ledger and can be serialized or rendered freely.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{balance_tolerance, AccountType};

/// One account line in a trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalanceRow {
    /// Account name.
    pub name: String,
    /// Classification from the chart of accounts, when registered.
    pub account_type: Option<AccountType>,
    /// Sum of debit amounts posted to this account.
    pub total_debit: Decimal,
    /// Sum of credit amounts posted to this account.
    pub total_credit: Decimal,
    /// Net balance under the account's sign convention (debit minus
    /// credit for unregistered accounts).
    pub balance: Decimal,
}

/// Column totals for a trial balance report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Sum of all debit amounts.
    pub total_debits: Decimal,
    /// Sum of all credit amounts.
    pub total_credits: Decimal,
    /// True iff the totals agree within the currency tolerance.
    pub is_balanced: bool,
}

/// Trial balance: one row per account plus column totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Cut-off date; `None` covers the whole ledger.
    pub as_of: Option<NaiveDate>,
    /// Account rows in name order.
    pub rows: Vec<AccountBalanceRow>,
    /// Column totals.
    pub totals: TrialBalanceTotals,
}

/// One line in a report section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRow {
    /// Account name.
    pub name: String,
    /// Amount under the section's sign convention.
    pub amount: Decimal,
}

/// A titled group of report lines with a subtotal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section heading.
    pub title: String,
    /// Lines in account-name order.
    pub rows: Vec<SectionRow>,
    /// Sum of the lines.
    pub total: Decimal,
}

impl Section {
    /// Builds a section, computing the subtotal from the rows.
    #[must_use]
    pub fn new(title: impl Into<String>, rows: Vec<SectionRow>) -> Self {
        let total = rows.iter().map(|row| row.amount).sum();
        Self {
            title: title.into(),
            rows,
            total,
        }
    }
}

/// Income statement: revenue and expenses over a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Income accounts, credit-normal amounts.
    pub revenue: Section,
    /// Expense accounts, debit-normal amounts.
    pub expenses: Section,
    /// Revenue total minus expense total.
    pub net_income: Decimal,
}

/// Balance sheet as of a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Asset accounts.
    pub assets: Section,
    /// Liability accounts.
    pub liabilities: Section,
    /// Equity accounts, including current earnings.
    pub equity: Section,
    /// True iff assets equal liabilities plus equity within the currency
    /// tolerance.
    pub is_balanced: bool,
}

impl BalanceSheetReport {
    /// Assembles the sheet and checks the accounting equation.
    #[must_use]
    pub fn new(assets: Section, liabilities: Section, equity: Section) -> Self {
        let gap = assets.total - liabilities.total - equity.total;
        let is_balanced = gap.abs() < balance_tolerance();
        Self {
            assets,
            liabilities,
            equity,
            is_balanced,
        }
    }
}
