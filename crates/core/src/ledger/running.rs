//! Running balance queries for time-series views.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;
use crate::period::Period;

/// Which line of a transaction an account filter matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Match only the debit line.
    Debit,
    /// Match only the credit line.
    Credit,
    /// Match either line.
    Either,
}

impl AccountRole {
    const fn includes_debit(self) -> bool {
        matches!(self, Self::Debit | Self::Either)
    }

    const fn includes_credit(self) -> bool {
        matches!(self, Self::Credit | Self::Either)
    }
}

/// Lazy iterator of `(date, cumulative balance)` pairs in ledger insertion
/// order.
///
/// The iterator is cheap to construct and `Clone`, so a chart view can
/// restart it at will. Transactions outside the period, or not matching
/// the account filter, contribute nothing and produce no point.
#[derive(Debug, Clone)]
pub struct RunningBalances<'a> {
    transactions: std::slice::Iter<'a, Transaction>,
    account: Option<&'a str>,
    role: AccountRole,
    period: Option<Period>,
    cumulative: Decimal,
}

impl<'a> RunningBalances<'a> {
    pub(crate) fn new(
        transactions: &'a [Transaction],
        account: Option<&'a str>,
        role: AccountRole,
        period: Option<Period>,
    ) -> Self {
        Self {
            transactions: transactions.iter(),
            account,
            role,
            period,
            cumulative: Decimal::ZERO,
        }
    }

    /// Signed contribution of one transaction under the current filter, or
    /// `None` when the transaction does not match.
    fn contribution(&self, tx: &Transaction) -> Option<Decimal> {
        if let Some(period) = self.period {
            if !period.contains(tx.date) {
                return None;
            }
        }

        let mut amount = Decimal::ZERO;
        let mut matched = false;

        if self.role.includes_debit() && self.account.is_none_or(|a| tx.debit_account == a) {
            amount += tx.debit_amount;
            matched = true;
        }
        if self.role.includes_credit() && self.account.is_none_or(|a| tx.credit_account == a) {
            amount -= tx.credit_amount;
            matched = true;
        }

        matched.then_some(amount)
    }
}

impl Iterator for RunningBalances<'_> {
    type Item = (NaiveDate, Decimal);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let tx = self.transactions.next()?;
            if let Some(amount) = self.contribution(tx) {
                self.cumulative += amount;
                return Some((tx.date, self.cumulative));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new(false);
        ledger
            .record(Transaction::new(
                date(1),
                "Sale",
                "Cash",
                dec!(500),
                "Sales Revenue",
                dec!(500),
            ))
            .unwrap();
        ledger
            .record(Transaction::new(
                date(5),
                "Rent",
                "Rent Expense",
                dec!(200),
                "Cash",
                dec!(200),
            ))
            .unwrap();
        ledger
            .record(Transaction::new(
                date(20),
                "Sale",
                "Cash",
                dec!(300),
                "Sales Revenue",
                dec!(300),
            ))
            .unwrap();
        ledger
    }

    #[test]
    fn test_running_balance_for_account() {
        let ledger = sample_ledger();
        let points: Vec<_> = ledger
            .running_balance(Some("Cash"), AccountRole::Either, None)
            .collect();
        assert_eq!(
            points,
            vec![
                (date(1), dec!(500)),
                (date(5), dec!(300)),
                (date(20), dec!(600)),
            ]
        );
    }

    #[test]
    fn test_running_balance_debit_role_only() {
        let ledger = sample_ledger();
        let points: Vec<_> = ledger
            .running_balance(Some("Cash"), AccountRole::Debit, None)
            .collect();
        // The rent payment credits Cash, so it is skipped entirely.
        assert_eq!(points, vec![(date(1), dec!(500)), (date(20), dec!(800))]);
    }

    #[test]
    fn test_running_balance_period_filter() {
        let ledger = sample_ledger();
        let period = Period::new(date(1), date(10)).unwrap();
        let points: Vec<_> = ledger
            .running_balance(Some("Cash"), AccountRole::Either, Some(period))
            .collect();
        assert_eq!(points, vec![(date(1), dec!(500)), (date(5), dec!(300))]);
    }

    #[test]
    fn test_running_balance_is_restartable() {
        let ledger = sample_ledger();
        let iter = ledger.running_balance(Some("Cash"), AccountRole::Either, None);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_running_balance_unfiltered_nets_to_zero_for_balanced_entries() {
        let ledger = sample_ledger();
        let last = ledger
            .running_balance(None, AccountRole::Either, None)
            .last()
            .unwrap();
        assert_eq!(last.1, dec!(0));
    }
}
