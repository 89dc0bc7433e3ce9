//! The ledger: an ordered sequence of transactions and its balance queries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::TransactionId;

use super::balance::TrialBalance;
use super::error::LedgerError;
use super::running::{AccountRole, RunningBalances};
use super::transaction::Transaction;
use super::validation::validate_transaction;
use crate::period::Period;

/// An ordered sequence of transactions.
///
/// Insertion order is chronological entry order, not date order. The
/// ledger starts empty, is appended to by `record`, and is replaced
/// wholesale by a session reset; individual entries are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    strict: bool,
}

impl Ledger {
    /// Creates an empty ledger.
    ///
    /// When `strict` is set, entries with unequal debit and credit amounts
    /// are rejected.
    #[must_use]
    pub fn new(strict: bool) -> Self {
        Self {
            transactions: Vec::new(),
            strict,
        }
    }

    /// Returns true if strict balancing is enabled.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Records a transaction.
    ///
    /// # Errors
    ///
    /// Returns a validation error without appending when the transaction
    /// debits and credits the same account, has a non-positive amount, or
    /// (in strict mode) has unequal debit and credit amounts.
    pub fn record(&mut self, tx: Transaction) -> Result<(), LedgerError> {
        validate_transaction(&tx, self.strict)?;
        tracing::debug!(id = %tx.id, date = %tx.date, "recorded transaction");
        self.transactions.push(tx);
        Ok(())
    }

    /// Edits the category of an existing transaction.
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` if no transaction has the given ID.
    pub fn set_category(
        &mut self,
        id: TransactionId,
        category: Option<String>,
    ) -> Result<(), LedgerError> {
        let tx = self
            .transactions
            .iter_mut()
            .find(|tx| tx.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        tx.category = category;
        Ok(())
    }

    /// Computes the trial balance over all transactions.
    ///
    /// Each transaction adds its debit amount to the debit account's net
    /// balance and subtracts its credit amount from the credit account's.
    /// Total debits and credits are independent sums (not netted). An
    /// out-of-balance result is a warning, never an error; entry may
    /// continue.
    #[must_use]
    pub fn trial_balance(&self) -> TrialBalance {
        let mut balances: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut total_debits = Decimal::ZERO;
        let mut total_credits = Decimal::ZERO;

        for tx in &self.transactions {
            *balances.entry(tx.debit_account.clone()).or_default() += tx.debit_amount;
            *balances.entry(tx.credit_account.clone()).or_default() -= tx.credit_amount;
            total_debits += tx.debit_amount;
            total_credits += tx.credit_amount;
        }

        let trial = TrialBalance {
            balances,
            total_debits,
            total_credits,
        };
        if !trial.is_balanced() {
            tracing::warn!(
                debits = %trial.total_debits,
                credits = %trial.total_credits,
                "trial balance is out of balance"
            );
        }
        trial
    }

    /// Returns true iff total debits equal total credits within the
    /// two-decimal currency tolerance.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.trial_balance().is_balanced()
    }

    /// Produces a lazy, restartable sequence of `(date, cumulative
    /// balance)` pairs in insertion order, filtered to the period and
    /// optionally to one account's role as debit or credit line.
    #[must_use]
    pub fn running_balance<'a>(
        &'a self,
        account: Option<&'a str>,
        role: AccountRole,
        period: Option<Period>,
    ) -> RunningBalances<'a> {
        RunningBalances::new(&self.transactions, account, role, period)
    }

    /// All transactions in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
