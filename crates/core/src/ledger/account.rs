//! Accounts and the chart of accounts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Account classification.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease liability/equity/income accounts
/// - Credits decrease asset/expense accounts, increase liability/equity/income accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (Cash, Equipment, Accounts Receivable).
    Asset,
    /// Liability account (Loans Payable, Accounts Payable).
    Liability,
    /// Equity account (Owner's Capital, Retained Earnings).
    Equity,
    /// Income account (Sales Revenue).
    Income,
    /// Expense account (Rent Expense, Salaries Expense).
    Expense,
}

/// Which side of the ledger increases an account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, Expense).
    Debit,
    /// Credit-normal accounts (Liability, Equity, Income).
    Credit,
}

impl AccountType {
    /// Returns the normal balance side for this account type.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Income => NormalBalance::Credit,
        }
    }

    /// Calculates the balance change for a debit/credit pair under this
    /// account type's sign convention.
    #[must_use]
    pub fn balance_change(
        self,
        debit: rust_decimal::Decimal,
        credit: rust_decimal::Decimal,
    ) -> rust_decimal::Decimal {
        match self.normal_balance() {
            NormalBalance::Debit => debit - credit,
            NormalBalance::Credit => credit - debit,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "asset"),
            Self::Liability => write!(f, "liability"),
            Self::Equity => write!(f, "equity"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "income" | "revenue" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::UnknownAccountType(s.to_string())),
        }
    }
}

/// An account in the chart of accounts.
///
/// The name is the unique key; running balances are derived from the
/// ledger, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
}

/// Name-keyed registry of accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartOfAccounts {
    accounts: BTreeMap<String, AccountType>,
}

impl ChartOfAccounts {
    /// Creates an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if an account with the same name already
    /// exists; the chart is not modified.
    pub fn add_account(
        &mut self,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Result<(), LedgerError> {
        let name = name.into();
        if self.accounts.contains_key(&name) {
            return Err(LedgerError::DuplicateAccount(name));
        }
        self.accounts.insert(name, account_type);
        Ok(())
    }

    /// Looks up an account's type by name.
    #[must_use]
    pub fn account_type(&self, name: &str) -> Option<AccountType> {
        self.accounts.get(name).copied()
    }

    /// Iterates accounts in name order.
    pub fn accounts(&self) -> impl Iterator<Item = Account> + '_ {
        self.accounts.iter().map(|(name, account_type)| Account {
            name: name.clone(),
            account_type: *account_type,
        })
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
