//! Plain-text transaction statement rendering.

use rust_decimal::Decimal;

use crate::ledger::Ledger;

/// Renders the ledger as a printable fixed-width statement.
///
/// Body lines are broken into pages of `page_lines` separated by form
/// feeds; `0` disables pagination. Totals appear once, after the last
/// page.
#[must_use]
pub fn render_statement(ledger: &Ledger, page_lines: usize) -> String {
    let header = format!(
        "{:<12} {:<28} {:<20} {:>12} {:<20} {:>12}",
        "Date", "Description", "Debit Account", "Debit", "Credit Account", "Credit"
    );

    let mut output = String::new();
    output.push_str(&header);
    output.push('\n');

    let mut total_debits = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;
    for (index, tx) in ledger.transactions().iter().enumerate() {
        if page_lines > 0 && index > 0 && index % page_lines == 0 {
            output.push('\x0c');
            output.push_str(&header);
            output.push('\n');
        }
        output.push_str(&format!(
            "{:<12} {:<28} {:<20} {:>12} {:<20} {:>12}\n",
            tx.date.to_string(),
            truncate(&tx.description, 28),
            truncate(&tx.debit_account, 20),
            tx.debit_amount.to_string(),
            truncate(&tx.credit_account, 20),
            tx.credit_amount.to_string(),
        ));
        total_debits += tx.debit_amount;
        total_credits += tx.credit_amount;
    }

    output.push_str(&format!(
        "{:<62} {:>12} {:<20} {:>12}\n",
        "TOTALS",
        total_debits.to_string(),
        "",
        total_credits.to_string()
    ));
    output
}

/// Truncates on a character boundary, appending an ellipsis marker.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}
