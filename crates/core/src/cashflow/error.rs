//! Cash-flow import error types.

use thiserror::Error;
use tally_shared::AppError;

/// Errors that can occur while importing or assembling cash-flow data.
#[derive(Debug, Error)]
pub enum CashFlowError {
    /// A required marker row is missing from the template.
    #[error("Template marker row not found: {marker}")]
    MarkerNotFound {
        /// The marker label that was expected.
        marker: &'static str,
    },

    /// A total marker appeared before its section marker.
    #[error("Template marker {total} appears before {section}")]
    MarkerOrder {
        /// Section opening marker.
        section: &'static str,
        /// Section total marker.
        total: &'static str,
    },

    /// The header row contains no recognizable month columns.
    #[error("Template header row has no month columns")]
    NoMonthColumns,

    /// The same month appears in more than one column.
    #[error("Month column {month} appears more than once")]
    DuplicateMonthColumn {
        /// The duplicated month abbreviation.
        month: &'static str,
    },

    /// The template has no rows at all.
    #[error("Template is empty")]
    EmptyTemplate,

    /// A monthly series was built from the wrong number of values.
    #[error("Expected 12 monthly values, got {actual}")]
    LengthMismatch {
        /// Number of values supplied.
        actual: usize,
    },

    /// A cell inside a summed range is not a number.
    #[error("Malformed amount at row {row}, column {column}")]
    MalformedCell {
        /// 1-based row number in the template.
        row: usize,
        /// 1-based column number in the template.
        column: usize,
    },

    /// Underlying CSV read failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<CashFlowError> for AppError {
    fn from(err: CashFlowError) -> Self {
        match err {
            CashFlowError::Csv(inner) => Self::Parse(inner.to_string()),
            CashFlowError::MalformedCell { .. } => Self::Parse(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
