//! Calendar months and fixed-size monthly series.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CashFlowError;

/// Calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    /// January.
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Zero-based index (January = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation as used in template column headers.
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }

    /// Parses a template column header such as `Jan-YY`, `Jan`, or
    /// `January` (case-insensitive). Returns `None` for non-month columns.
    #[must_use]
    pub fn from_column_header(header: &str) -> Option<Self> {
        let name = header.trim().trim_end_matches("-YY");
        Self::ALL.into_iter().find(|month| {
            name.eq_ignore_ascii_case(month.abbrev())
                || name.eq_ignore_ascii_case(month.full_name())
        })
    }

    /// Full English name.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// One value per calendar month, stored as a fixed-size array indexed by
/// `Month`. The length is a construction-time invariant: `from_values`
/// rejects anything but twelve values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySeries([Decimal; 12]);

impl MonthlySeries {
    /// All-zero series.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a series from exactly twelve values in calendar order.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` for any other length.
    pub fn from_values(values: Vec<Decimal>) -> Result<Self, CashFlowError> {
        let len = values.len();
        let array: [Decimal; 12] = values
            .try_into()
            .map_err(|_| CashFlowError::LengthMismatch { actual: len })?;
        Ok(Self(array))
    }

    /// Value for a month.
    #[must_use]
    pub fn get(&self, month: Month) -> Decimal {
        self.0[month.index()]
    }

    /// Sets the value for a month.
    pub fn set(&mut self, month: Month, value: Decimal) {
        self.0[month.index()] = value;
    }

    /// Iterates `(month, value)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, Decimal)> + '_ {
        Month::ALL.into_iter().map(|month| (month, self.get(month)))
    }

    /// Sum over all twelve months.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.0.iter().copied().sum()
    }
}

impl std::ops::Index<Month> for MonthlySeries {
    type Output = Decimal;

    fn index(&self, month: Month) -> &Self::Output {
        &self.0[month.index()]
    }
}
