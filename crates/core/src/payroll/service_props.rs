//! Property-based tests for payroll processing.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::config::PayrollSettings;
use tally_shared::types::EmployeeId;

use super::error::PayrollError;
use super::service::PayrollService;
use super::types::{Employee, PayType};
use crate::ledger::Ledger;
use crate::period::Period;

fn arb_amount(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_rate() -> impl Strategy<Value = Decimal> {
    // 0.0000 to 0.5000 as a fraction.
    (0i64..=5000).prop_map(|basis| Decimal::new(basis, 4))
}

fn arb_pay_type() -> impl Strategy<Value = PayType> {
    prop_oneof![
        (arb_amount(10_000), arb_amount(20_000)).prop_map(|(rate, hours_per_period)| {
            PayType::Hourly {
                rate,
                hours_per_period,
            }
        }),
        arb_amount(20_000_000).prop_map(|annual_salary| PayType::Salaried { annual_salary }),
    ]
}

fn arb_roster() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(arb_pay_type(), 1..8).prop_map(|pay_types| {
        pay_types
            .into_iter()
            .enumerate()
            .map(|(index, pay_type)| Employee {
                id: EmployeeId::new(),
                code: format!("EMP{index:03}"),
                name: format!("Employee {index}"),
                pay_type,
            })
            .collect()
    })
}

fn arb_rates() -> impl Strategy<Value = PayrollSettings> {
    (arb_rate(), arb_rate(), arb_amount(20_000), arb_rate()).prop_map(
        |(federal_tax_rate, state_tax_rate, insurance_per_employee, employer_tax_rate)| {
            PayrollSettings {
                federal_tax_rate,
                state_tax_rate,
                insurance_per_employee,
                employer_tax_rate,
            }
        },
    )
}

fn pay_period() -> Period {
    Period::new(
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
    )
    .unwrap()
}

proptest! {
    /// A run either rejects a negative net up front or journals balanced
    /// pairs a strict ledger accepts, net-pay Cash pair included.
    #[test]
    fn journal_entries_keep_strict_ledger_balanced(
        roster in arb_roster(),
        rates in arb_rates(),
    ) {
        let records = match PayrollService::run_payroll(&roster, &rates, pay_period()) {
            Ok(records) => records,
            Err(PayrollError::NegativeNetPay { net, .. }) => {
                prop_assert!(net < Decimal::ZERO);
                return Ok(());
            }
            Err(other) => {
                prop_assert!(false, "unexpected payroll error: {other}");
                unreachable!()
            }
        };
        let total_net: Decimal = records.iter().map(|r| r.net_pay).sum();
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let entries = PayrollService::journal_entries(&records, date);

        prop_assert_eq!(
            entries.iter().any(|entry| entry.credit_account == "Cash"),
            total_net > Decimal::ZERO,
        );
        let mut ledger = Ledger::new(true);
        for entry in entries {
            prop_assert!(entry.debit_amount > Decimal::ZERO);
            prop_assert_eq!(entry.debit_amount, entry.credit_amount);
            ledger.record(entry).unwrap();
        }
        prop_assert!(ledger.is_balanced());
    }

    /// A successful run produces exactly one record per employee, each
    /// reconciling gross = net + deductions with a non-negative net.
    #[test]
    fn records_reconcile_gross_pay(
        roster in arb_roster(),
        rates in arb_rates(),
    ) {
        let records = match PayrollService::run_payroll(&roster, &rates, pay_period()) {
            Ok(records) => records,
            Err(PayrollError::NegativeNetPay { .. }) => return Ok(()),
            Err(other) => {
                prop_assert!(false, "unexpected payroll error: {other}");
                unreachable!()
            }
        };
        prop_assert_eq!(records.len(), roster.len());
        for record in records {
            prop_assert!(record.net_pay >= Decimal::ZERO);
            prop_assert_eq!(record.gross, record.net_pay + record.total_deductions());
        }
    }
}
