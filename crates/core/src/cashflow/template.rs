//! Importer for the fixed-layout 12-month cash-flow template.
//!
//! The template is a grid: a header row whose month columns carry a
//! `-YY` suffix (`Jan-YY` .. `Dec-YY`), then labeled rows. Two marker
//! pairs bound the summed sections: `CASH RECEIPTS` .. `TOTAL CASH
//! RECEIPTS` for inflows and `CASH PAID OUT` .. `TOTAL CASH PAID OUT`
//! for outflows. Rows strictly between a section marker and its total
//! marker are summed per month column.

use std::io::Read;

use rust_decimal::Decimal;
use tracing::debug;

use super::error::CashFlowError;
use super::month::{Month, MonthlySeries};
use super::types::CashFlowStatement;

/// Marker row opening the inflow section.
pub const CASH_RECEIPTS: &str = "CASH RECEIPTS";
/// Marker row closing the inflow section.
pub const TOTAL_CASH_RECEIPTS: &str = "TOTAL CASH RECEIPTS";
/// Marker row opening the outflow section.
pub const CASH_PAID_OUT: &str = "CASH PAID OUT";
/// Marker row closing the outflow section.
pub const TOTAL_CASH_PAID_OUT: &str = "TOTAL CASH PAID OUT";

/// Parses a cash-flow template from CSV data and re-projects it to a
/// normalized per-month statement.
///
/// # Errors
///
/// Returns an error when the data is not valid CSV, the template is
/// empty, the header has no month columns or repeats one, a marker row
/// is missing or out of order, or a summed cell is not a number. No
/// partial statement is produced on failure.
pub fn import_template<R: Read>(reader: R) -> Result<CashFlowStatement, CashFlowError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    let Some((header, body)) = rows.split_first() else {
        return Err(CashFlowError::EmptyTemplate);
    };

    let month_columns = month_columns(header)?;
    debug!(months = month_columns.len(), rows = body.len(), "parsed template grid");

    let inflows = sum_section(body, &month_columns, CASH_RECEIPTS, TOTAL_CASH_RECEIPTS)?;
    let outflows = sum_section(body, &month_columns, CASH_PAID_OUT, TOTAL_CASH_PAID_OUT)?;

    Ok(CashFlowStatement::from_series(&inflows, &outflows))
}

/// Maps header cells ending in `-YY` to their month and column index.
fn month_columns(header: &[String]) -> Result<Vec<(usize, Month)>, CashFlowError> {
    let mut columns: Vec<(usize, Month)> = Vec::new();
    for (index, cell) in header.iter().enumerate() {
        // Non-month columns (item labels, pre-startup estimates, yearly
        // totals) simply don't parse as months.
        if !cell.trim().ends_with("-YY") {
            continue;
        }
        let Some(month) = Month::from_column_header(cell) else {
            continue;
        };
        if columns.iter().any(|(_, seen)| *seen == month) {
            return Err(CashFlowError::DuplicateMonthColumn {
                month: month.abbrev(),
            });
        }
        columns.push((index, month));
    }
    if columns.is_empty() {
        return Err(CashFlowError::NoMonthColumns);
    }
    Ok(columns)
}

/// Sums one marker-bounded section per month column.
fn sum_section(
    body: &[Vec<String>],
    month_columns: &[(usize, Month)],
    section: &'static str,
    total: &'static str,
) -> Result<MonthlySeries, CashFlowError> {
    let section_row = find_marker(body, section)?;
    let total_row = find_marker(body, total)?;
    if total_row <= section_row {
        return Err(CashFlowError::MarkerOrder { section, total });
    }

    let mut series = MonthlySeries::zero();
    for (row_index, row) in body
        .iter()
        .enumerate()
        .take(total_row)
        .skip(section_row + 1)
    {
        for &(column, month) in month_columns {
            let cell = row.get(column).map_or("", |value| value.as_str());
            let value = parse_cell(cell).ok_or(CashFlowError::MalformedCell {
                // 1-based, counting the header row.
                row: row_index + 2,
                column: column + 1,
            })?;
            series.set(month, series.get(month) + value);
        }
    }
    Ok(series)
}

/// Index of the first body row whose label cell matches `marker`
/// (trimmed, case-insensitive).
fn find_marker(body: &[Vec<String>], marker: &'static str) -> Result<usize, CashFlowError> {
    body.iter()
        .position(|row| {
            row.first()
                .is_some_and(|cell| cell.trim().eq_ignore_ascii_case(marker))
        })
        .ok_or(CashFlowError::MarkerNotFound { marker })
}

/// Parses one grid cell. Blank cells count as zero; currency dressing
/// (`$`, thousands separators) is tolerated.
fn parse_cell(cell: &str) -> Option<Decimal> {
    let cleaned = cell.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }
    cleaned.parse().ok()
}
