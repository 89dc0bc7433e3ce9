//! Assembled cash-flow statements.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::{Month, MonthlySeries};

/// Inflow, outflow, and net for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthFlow {
    /// Calendar month.
    pub month: Month,
    /// Total cash receipts.
    pub inflow: Decimal,
    /// Total cash paid out.
    pub outflow: Decimal,
}

impl MonthFlow {
    /// Net cash flow for the month (inflow minus outflow).
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.inflow - self.outflow
    }
}

/// A 12-month cash-flow statement: one row per calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    rows: Vec<MonthFlow>,
}

impl CashFlowStatement {
    /// Pairs inflow and outflow series into a statement with one row per
    /// month, January through December.
    #[must_use]
    pub fn from_series(inflows: &MonthlySeries, outflows: &MonthlySeries) -> Self {
        let rows = Month::ALL
            .into_iter()
            .map(|month| MonthFlow {
                month,
                inflow: inflows.get(month),
                outflow: outflows.get(month),
            })
            .collect();
        Self { rows }
    }

    /// Monthly rows in calendar order.
    #[must_use]
    pub fn rows(&self) -> &[MonthFlow] {
        &self.rows
    }

    /// Annual cash receipts.
    #[must_use]
    pub fn total_inflow(&self) -> Decimal {
        self.rows.iter().map(|row| row.inflow).sum()
    }

    /// Annual cash paid out.
    #[must_use]
    pub fn total_outflow(&self) -> Decimal {
        self.rows.iter().map(|row| row.outflow).sum()
    }

    /// Annual net cash flow.
    #[must_use]
    pub fn net_cash_flow(&self) -> Decimal {
        self.total_inflow() - self.total_outflow()
    }
}
