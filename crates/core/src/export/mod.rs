//! Delimited export and import of ledger data.
//!
//! Transactions round-trip through CSV: exporting and re-importing
//! reproduces the same entries, IDs included, in the same order. The
//! trial balance export is one-way (a report snapshot, not a data
//! interchange format).

pub mod statement;

pub use statement::render_statement;

use std::io::{Read, Write};

use thiserror::Error;
use tracing::debug;

use tally_shared::AppError;

use crate::ledger::Transaction;
use crate::reports::TrialBalanceReport;

/// Errors that can occur during export or import.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization or parsing failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be decoded as a transaction.
    #[error("Malformed row at line {line}")]
    InvalidRow {
        /// 1-based line number in the input.
        line: u64,
    },
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Io(inner) => Self::Io(inner.to_string()),
            _ => Self::Parse(err.to_string()),
        }
    }
}

/// Writes transactions as CSV with a header row.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_transactions<W: Write>(
    writer: W,
    transactions: &[Transaction],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for tx in transactions {
        csv_writer.serialize(tx)?;
    }
    csv_writer.flush()?;
    debug!(count = transactions.len(), "exported transactions");
    Ok(())
}

/// Reads transactions back from CSV, preserving order and IDs.
///
/// # Errors
///
/// Returns `InvalidRow` (with the offending line) for a row that does not
/// decode as a transaction; nothing is returned on failure.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>, ExportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut transactions = Vec::new();
    for result in csv_reader.deserialize() {
        let tx: Transaction = result.map_err(|err| {
            let line = err.position().map(csv::Position::line);
            match line {
                Some(line) => ExportError::InvalidRow { line },
                None => ExportError::Csv(err),
            }
        })?;
        transactions.push(tx);
    }
    debug!(count = transactions.len(), "imported transactions");
    Ok(transactions)
}

/// Writes a trial balance report as CSV, with a trailing totals row.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_trial_balance<W: Write>(
    writer: W,
    report: &TrialBalanceReport,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["account", "type", "debit", "credit", "balance"])?;
    for row in &report.rows {
        let kind = row
            .account_type
            .map_or_else(String::new, |kind| kind.to_string());
        csv_writer.write_record([
            row.name.as_str(),
            kind.as_str(),
            &row.total_debit.to_string(),
            &row.total_credit.to_string(),
            &row.balance.to_string(),
        ])?;
    }
    csv_writer.write_record([
        "TOTALS",
        "",
        &report.totals.total_debits.to_string(),
        &report.totals.total_credits.to_string(),
        "",
    ])?;
    csv_writer.flush()?;
    Ok(())
}
