//! Business rule validation for ledger operations.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::transaction::Transaction;

/// Validates a transaction before it is recorded.
///
/// Rejects entries that debit and credit the same account and entries with
/// a non-positive amount on either line. When `strict` is set, also rejects
/// entries whose debit amount differs from the credit amount; lenient mode
/// records the entry and lets the trial balance surface the gap.
///
/// # Errors
///
/// Returns an error describing the violated rule; the ledger is not
/// mutated.
pub fn validate_transaction(tx: &Transaction, strict: bool) -> Result<(), LedgerError> {
    if tx.debit_account == tx.credit_account {
        return Err(LedgerError::SameAccount(tx.debit_account.clone()));
    }
    if tx.debit_amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(tx.debit_amount));
    }
    if tx.credit_amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(tx.credit_amount));
    }
    if strict && tx.debit_amount != tx.credit_amount {
        return Err(LedgerError::UnbalancedEntry {
            debit: tx.debit_amount,
            credit: tx.credit_amount,
        });
    }
    Ok(())
}

/// Parses a user-entered amount field.
///
/// Accepts plain decimal numbers with an optional leading `$` and embedded
/// thousands separators. Failure is a local-recovery error: the caller
/// reports it and resets the field to zero.
///
/// # Errors
///
/// Returns `MalformedAmount` when the input is not numeric.
pub fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned
        .parse::<Decimal>()
        .map_err(|_| LedgerError::MalformedAmount(input.to_string()))
}
