//! Payroll domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::EmployeeId;

use crate::period::Period;

/// How an employee's gross pay is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PayType {
    /// Paid per hour worked.
    Hourly {
        /// Hourly rate.
        rate: Decimal,
        /// Hours worked per pay period.
        hours_per_period: Decimal,
    },
    /// Paid a fixed annual salary, semi-monthly (24 periods per year).
    Salaried {
        /// Annual salary.
        annual_salary: Decimal,
    },
}

/// An employee on the payroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Employee reference code (e.g. "EMP001").
    pub code: String,
    /// Employee name.
    pub name: String,
    /// Pay structure.
    pub pay_type: PayType,
}

/// One employee's pay for one period, after withholdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Employee identifier.
    pub employee_id: EmployeeId,
    /// Employee name at processing time.
    pub employee_name: String,
    /// Gross pay for the period.
    pub gross: Decimal,
    /// Federal income tax withheld.
    pub federal_tax: Decimal,
    /// State income tax withheld.
    pub state_tax: Decimal,
    /// Insurance deduction.
    pub insurance: Decimal,
    /// Take-home pay after all deductions.
    pub net_pay: Decimal,
    /// Employer-side payroll taxes (not withheld from the employee).
    pub employer_taxes: Decimal,
    /// Pay period covered.
    pub period: Period,
}

impl PayrollRecord {
    /// Total deductions withheld from gross pay.
    #[must_use]
    pub fn total_deductions(&self) -> Decimal {
        self.federal_tax + self.state_tax + self.insurance
    }

    /// Total employer cost: gross pay plus employer taxes.
    #[must_use]
    pub fn employer_cost(&self) -> Decimal {
        self.gross + self.employer_taxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_totals() {
        let record = PayrollRecord {
            employee_id: EmployeeId::new(),
            employee_name: "Jane Roe".into(),
            gross: dec!(2000),
            federal_tax: dec!(300),
            state_tax: dec!(100),
            insurance: dec!(50),
            net_pay: dec!(1550),
            employer_taxes: dec!(153),
            period: Period::new(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            )
            .unwrap(),
        };
        assert_eq!(record.total_deductions(), dec!(450));
        assert_eq!(record.employer_cost(), dec!(2153));
    }
}
