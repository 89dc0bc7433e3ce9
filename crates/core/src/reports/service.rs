//! Report assembly.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{
    AccountBalanceRow, BalanceSheetReport, IncomeStatementReport, Section, SectionRow,
    TrialBalanceReport, TrialBalanceTotals,
};
use crate::ledger::{balance_tolerance, AccountType, ChartOfAccounts, Ledger, NormalBalance};
use crate::period::Period;

/// Per-account debit and credit sums over a slice of the ledger.
#[derive(Debug, Default, Clone, Copy)]
struct AccountTotals {
    debit: Decimal,
    credit: Decimal,
}

/// Service for assembling financial reports from the ledger.
///
/// Every report is computed fresh from the transaction log; nothing is
/// cached. An empty ledger yields empty, zero-total reports rather than
/// an error.
pub struct ReportService;

impl ReportService {
    /// Trial balance: per-account debit/credit totals and net balances,
    /// optionally cut off at a date.
    #[must_use]
    pub fn trial_balance(
        ledger: &Ledger,
        chart: &ChartOfAccounts,
        as_of: Option<NaiveDate>,
    ) -> TrialBalanceReport {
        let totals = Self::account_totals(ledger, |date| {
            as_of.is_none_or(|cutoff| date <= cutoff)
        });

        let mut total_debits = Decimal::ZERO;
        let mut total_credits = Decimal::ZERO;
        let rows = totals
            .into_iter()
            .map(|(name, sums)| {
                total_debits += sums.debit;
                total_credits += sums.credit;
                let account_type = chart.account_type(&name);
                let balance = account_type.map_or(sums.debit - sums.credit, |kind| {
                    kind.balance_change(sums.debit, sums.credit)
                });
                AccountBalanceRow {
                    name,
                    account_type,
                    total_debit: sums.debit,
                    total_credit: sums.credit,
                    balance,
                }
            })
            .collect();

        let is_balanced = (total_debits - total_credits).abs() < balance_tolerance();
        debug!(%total_debits, %total_credits, is_balanced, "trial balance assembled");
        TrialBalanceReport {
            as_of,
            rows,
            totals: TrialBalanceTotals {
                total_debits,
                total_credits,
                is_balanced,
            },
        }
    }

    /// Income statement over a period: revenue less expenses.
    ///
    /// Only accounts registered in the chart as income or expense appear;
    /// amounts follow each side's normal balance.
    #[must_use]
    pub fn income_statement(
        ledger: &Ledger,
        chart: &ChartOfAccounts,
        period: Option<Period>,
    ) -> IncomeStatementReport {
        let totals = Self::account_totals(ledger, |date| {
            period.is_none_or(|p| p.contains(date))
        });

        let revenue = Self::section("Revenue", &totals, chart, AccountType::Income);
        let expenses = Self::section("Expenses", &totals, chart, AccountType::Expense);
        let net_income = revenue.total - expenses.total;

        IncomeStatementReport {
            revenue,
            expenses,
            net_income,
        }
    }

    /// Balance sheet as of a date.
    ///
    /// Net income to date is closed into equity as a "Current Earnings"
    /// line, so a ledger of balanced entries satisfies assets =
    /// liabilities + equity.
    #[must_use]
    pub fn balance_sheet(
        ledger: &Ledger,
        chart: &ChartOfAccounts,
        as_of: Option<NaiveDate>,
    ) -> BalanceSheetReport {
        let totals = Self::account_totals(ledger, |date| {
            as_of.is_none_or(|cutoff| date <= cutoff)
        });

        let assets = Self::section("Assets", &totals, chart, AccountType::Asset);
        let liabilities = Self::section("Liabilities", &totals, chart, AccountType::Liability);
        let mut equity = Self::section("Equity", &totals, chart, AccountType::Equity);

        let revenue = Self::section("Revenue", &totals, chart, AccountType::Income);
        let expenses = Self::section("Expenses", &totals, chart, AccountType::Expense);
        let earnings = revenue.total - expenses.total;
        if !earnings.is_zero() {
            equity.rows.push(SectionRow {
                name: "Current Earnings".into(),
                amount: earnings,
            });
            equity.total += earnings;
        }

        BalanceSheetReport::new(assets, liabilities, equity)
    }

    /// Sums debits and credits per account over the transactions passing
    /// the date filter.
    fn account_totals(
        ledger: &Ledger,
        mut include: impl FnMut(NaiveDate) -> bool,
    ) -> BTreeMap<String, AccountTotals> {
        let mut totals: BTreeMap<String, AccountTotals> = BTreeMap::new();
        for tx in ledger.transactions() {
            if !include(tx.date) {
                continue;
            }
            totals
                .entry(tx.debit_account.clone())
                .or_default()
                .debit += tx.debit_amount;
            totals
                .entry(tx.credit_account.clone())
                .or_default()
                .credit += tx.credit_amount;
        }
        totals
    }

    /// Builds one report section from the accounts of a given type.
    fn section(
        title: &str,
        totals: &BTreeMap<String, AccountTotals>,
        chart: &ChartOfAccounts,
        kind: AccountType,
    ) -> Section {
        let rows = totals
            .iter()
            .filter(|(name, _)| chart.account_type(name) == Some(kind))
            .map(|(name, sums)| {
                let amount = match kind.normal_balance() {
                    NormalBalance::Debit => sums.debit - sums.credit,
                    NormalBalance::Credit => sums.credit - sums.debit,
                };
                SectionRow {
                    name: name.clone(),
                    amount,
                }
            })
            .collect();
        Section::new(title, rows)
    }
}
