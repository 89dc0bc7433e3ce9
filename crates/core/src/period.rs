//! Date-range filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range used as a filter predicate over ledger dates.
///
/// Periods are never persisted; each view constructs the one it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Creates a period, rejecting an end date before the start date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidPeriod> {
        if end < start {
            return Err(InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Error for a period whose end precedes its start.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Invalid period: end date {end} is before start date {start}")]
pub struct InvalidPeriod {
    /// Requested start date.
    pub start: NaiveDate,
    /// Requested end date.
    pub end: NaiveDate,
}
