//! Trial balance calculation types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Two-decimal currency tolerance for the debits-equal-credits check.
#[must_use]
pub fn balance_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Net balance per account plus independent debit/credit totals.
///
/// Balances are raw ledger nets: the debit amount adds to the debit
/// account, the credit amount subtracts from the credit account. Account
/// type sign conventions are applied by the report layer, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalance {
    /// Net balance per account name, in name order.
    pub balances: BTreeMap<String, Decimal>,
    /// Sum of all debit amounts.
    pub total_debits: Decimal,
    /// Sum of all credit amounts.
    pub total_credits: Decimal,
}

impl TrialBalance {
    /// Returns true iff total debits equal total credits within the
    /// two-decimal currency tolerance.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (self.total_debits - self.total_credits).abs() < balance_tolerance()
    }

    /// Difference between total debits and total credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debits - self.total_credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trial(debits: Decimal, credits: Decimal) -> TrialBalance {
        TrialBalance {
            balances: BTreeMap::new(),
            total_debits: debits,
            total_credits: credits,
        }
    }

    #[test]
    fn test_balanced_when_equal() {
        assert!(trial(dec!(500), dec!(500)).is_balanced());
    }

    #[test]
    fn test_balanced_within_tolerance() {
        // A sub-cent rounding gap does not trip the check.
        assert!(trial(dec!(100.005), dec!(100)).is_balanced());
    }

    #[test]
    fn test_unbalanced_at_tolerance() {
        assert!(!trial(dec!(100.01), dec!(100)).is_balanced());
        assert!(!trial(dec!(100), dec!(100.01)).is_balanced());
    }

    #[test]
    fn test_difference() {
        assert_eq!(trial(dec!(100), dec!(40)).difference(), dec!(60));
    }
}
