//! Property tests for ledger balance behavior.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::ledger::Ledger;
use super::running::AccountRole;
use super::transaction::Transaction;

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    // Positive currency amounts up to 1,000.00 with two decimal places.
    (1i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn day_strategy() -> impl Strategy<Value = NaiveDate> {
    (1u32..=28u32).prop_map(|d| NaiveDate::from_ymd_opt(2025, 3, d).expect("valid day"))
}

fn balanced_tx_strategy() -> impl Strategy<Value = Transaction> {
    (day_strategy(), amount_strategy())
        .prop_map(|(date, amount)| {
            Transaction::new(date, "entry", "Cash", amount, "Sales Revenue", amount)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For all sequences of balanced transactions, `is_balanced` holds.
    #[test]
    fn prop_balanced_sequences_stay_balanced(
        txs in prop::collection::vec(balanced_tx_strategy(), 0..30),
    ) {
        let mut ledger = Ledger::new(true);
        for tx in txs {
            ledger.record(tx).expect("balanced entry");
        }
        prop_assert!(ledger.is_balanced());
    }

    /// One lopsided entry whose gap exceeds the tolerance breaks the
    /// balance check.
    #[test]
    fn prop_gap_beyond_tolerance_unbalances(
        txs in prop::collection::vec(balanced_tx_strategy(), 0..10),
        base in amount_strategy(),
        gap_cents in 1i64..10_000i64,
    ) {
        let mut ledger = Ledger::new(false);
        for tx in txs {
            ledger.record(tx).expect("balanced entry");
        }
        let gap = Decimal::new(gap_cents, 2);
        let lopsided = Transaction::new(
            NaiveDate::from_ymd_opt(2025, 3, 31).expect("valid day"),
            "lopsided",
            "Cash",
            base + gap,
            "Sales Revenue",
            base,
        );
        ledger.record(lopsided).expect("lenient mode accepts");
        prop_assert!(!ledger.is_balanced());
    }

    /// Trial balance totals equal the independent sums of the entry lines.
    #[test]
    fn prop_totals_are_independent_sums(
        txs in prop::collection::vec(balanced_tx_strategy(), 1..30),
    ) {
        let expected_debits: Decimal = txs.iter().map(|tx| tx.debit_amount).sum();
        let expected_credits: Decimal = txs.iter().map(|tx| tx.credit_amount).sum();

        let mut ledger = Ledger::new(false);
        for tx in txs {
            ledger.record(tx).expect("balanced entry");
        }
        let trial = ledger.trial_balance();
        prop_assert_eq!(trial.total_debits, expected_debits);
        prop_assert_eq!(trial.total_credits, expected_credits);
    }

    /// The final running balance for an account equals the sum of the
    /// signed effects of every transaction touching it.
    #[test]
    fn prop_running_balance_matches_signed_effects(
        txs in prop::collection::vec(balanced_tx_strategy(), 1..30),
    ) {
        let expected: Decimal = txs.iter().map(|tx| tx.signed_effect_on("Cash")).sum();

        let mut ledger = Ledger::new(false);
        for tx in txs {
            ledger.record(tx).expect("balanced entry");
        }
        let last = ledger
            .running_balance(Some("Cash"), AccountRole::Either, None)
            .last()
            .expect("at least one point");
        prop_assert_eq!(last.1, expected);
    }

    /// Restarting the running balance iterator yields the same points.
    #[test]
    fn prop_running_balance_restartable(
        txs in prop::collection::vec(balanced_tx_strategy(), 1..20),
    ) {
        let mut ledger = Ledger::new(false);
        for tx in txs {
            ledger.record(tx).expect("balanced entry");
        }
        let iter = ledger.running_balance(Some("Cash"), AccountRole::Either, None);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        prop_assert_eq!(first, second);
    }
}
