//! Payroll processing service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_shared::config::PayrollSettings;
use tracing::debug;

use super::error::PayrollError;
use super::types::{Employee, PayType, PayrollRecord};
use crate::ledger::Transaction;
use crate::period::Period;

/// Semi-monthly pay: 24 periods per year.
const PERIODS_PER_YEAR: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Service for running payroll and journaling its accounting impact.
///
/// Pure business logic: withholding rates come from configuration, state
/// lives in the session.
pub struct PayrollService;

impl PayrollService {
    /// Validates an employee before they enter the roster.
    ///
    /// # Errors
    ///
    /// Returns an error when the code or name is blank, or a rate, hour
    /// count, or salary is negative.
    pub fn validate_employee(employee: &Employee) -> Result<(), PayrollError> {
        if employee.code.trim().is_empty() || employee.name.trim().is_empty() {
            return Err(PayrollError::MissingEmployee);
        }
        let negative = match employee.pay_type {
            PayType::Hourly {
                rate,
                hours_per_period,
            } => rate < Decimal::ZERO || hours_per_period < Decimal::ZERO,
            PayType::Salaried { annual_salary } => annual_salary < Decimal::ZERO,
        };
        if negative {
            return Err(PayrollError::NegativeRate);
        }
        Ok(())
    }

    /// Gross pay for one period: hourly rate times hours, or annual
    /// salary over 24 semi-monthly periods.
    #[must_use]
    pub fn gross_pay(pay_type: PayType) -> Decimal {
        let gross = match pay_type {
            PayType::Hourly {
                rate,
                hours_per_period,
            } => rate * hours_per_period,
            PayType::Salaried { annual_salary } => annual_salary / PERIODS_PER_YEAR,
        };
        gross.round_dp(2)
    }

    /// Computes pay and withholdings for one employee.
    #[must_use]
    pub fn pay_employee(
        employee: &Employee,
        rates: &PayrollSettings,
        period: Period,
    ) -> PayrollRecord {
        let gross = Self::gross_pay(employee.pay_type);
        let federal_tax = (gross * rates.federal_tax_rate).round_dp(2);
        let state_tax = (gross * rates.state_tax_rate).round_dp(2);
        let insurance = rates.insurance_per_employee;
        let net_pay = gross - federal_tax - state_tax - insurance;
        let employer_taxes = (gross * rates.employer_tax_rate).round_dp(2);

        PayrollRecord {
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            gross,
            federal_tax,
            state_tax,
            insurance,
            net_pay,
            employer_taxes,
            period,
        }
    }

    /// Runs payroll for the whole roster.
    ///
    /// # Errors
    ///
    /// Returns `NoEmployees` when the roster is empty, and
    /// `NegativeNetPay` when any employee's deductions exceed their gross
    /// pay (no records are produced, so nothing is ever journaled for a
    /// run that misstates pay).
    pub fn run_payroll(
        employees: &[Employee],
        rates: &PayrollSettings,
        period: Period,
    ) -> Result<Vec<PayrollRecord>, PayrollError> {
        if employees.is_empty() {
            return Err(PayrollError::NoEmployees);
        }
        let records = employees
            .iter()
            .map(|employee| Self::pay_employee(employee, rates, period))
            .collect::<Vec<_>>();
        if let Some(record) = records.iter().find(|r| r.net_pay < Decimal::ZERO) {
            return Err(PayrollError::NegativeNetPay {
                employee: record.employee_name.clone(),
                net: record.net_pay,
            });
        }
        debug!(employees = records.len(), "payroll run computed");
        Ok(records)
    }

    /// Double-entry journal pairs for a payroll run.
    ///
    /// Gross pay is expensed against cash (net) and the withholding
    /// liabilities; employer taxes are expensed against their own
    /// liability. Zero-amount pairs are omitted, since the ledger
    /// rejects non-positive amounts; negative nets cannot reach here
    /// because `run_payroll` rejects them. Taken together the pairs
    /// debit and credit the same total, so journaling a run never
    /// unbalances the ledger.
    #[must_use]
    pub fn journal_entries(records: &[PayrollRecord], date: NaiveDate) -> Vec<Transaction> {
        let net: Decimal = records.iter().map(|r| r.net_pay).sum();
        let federal: Decimal = records.iter().map(|r| r.federal_tax).sum();
        let state: Decimal = records.iter().map(|r| r.state_tax).sum();
        let insurance: Decimal = records.iter().map(|r| r.insurance).sum();
        let employer: Decimal = records.iter().map(|r| r.employer_taxes).sum();

        let pairs = [
            ("Salaries Expense", "Cash", net),
            ("Salaries Expense", "Federal Tax Payable", federal),
            ("Salaries Expense", "State Tax Payable", state),
            ("Salaries Expense", "Insurance Payable", insurance),
            ("Payroll Tax Expense", "Employer Taxes Payable", employer),
        ];

        pairs
            .into_iter()
            .filter(|(_, _, amount)| *amount > Decimal::ZERO)
            .map(|(debit, credit, amount)| {
                Transaction::new(date, "Payroll run", debit, amount, credit, amount)
                    .with_category("Payroll")
            })
            .collect()
    }
}
