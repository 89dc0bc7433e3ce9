//! Ledger transaction domain type.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::TransactionId;

/// A double-entry transaction with one debit line and one credit line.
///
/// Every entry names the account it debits and the account it credits; the
/// two amounts should be equal for a balanced entry (enforced only when the
/// ledger runs in strict mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Account receiving the debit.
    pub debit_account: String,
    /// Debit amount (must be positive).
    pub debit_amount: Decimal,
    /// Account receiving the credit.
    pub credit_account: String,
    /// Credit amount (must be positive).
    pub credit_amount: Decimal,
    /// Optional reporting category.
    pub category: Option<String>,
}

impl Transaction {
    /// Creates a new transaction with a fresh ID and no category.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        debit_account: impl Into<String>,
        debit_amount: Decimal,
        credit_account: impl Into<String>,
        credit_amount: Decimal,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            debit_account: debit_account.into(),
            debit_amount,
            credit_account: credit_account.into(),
            credit_amount,
            category: None,
        }
    }

    /// Sets the reporting category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns true if either line of this transaction touches the account.
    #[must_use]
    pub fn touches(&self, account: &str) -> bool {
        self.debit_account == account || self.credit_account == account
    }

    /// Net effect of this transaction on the named account: the debit
    /// amount adds, the credit amount subtracts.
    #[must_use]
    pub fn signed_effect_on(&self, account: &str) -> Decimal {
        let mut effect = Decimal::ZERO;
        if self.debit_account == account {
            effect += self.debit_amount;
        }
        if self.credit_account == account {
            effect -= self.credit_amount;
        }
        effect
    }
}
