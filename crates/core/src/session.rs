//! Session state: the single mutable application-state object.
//!
//! All mutable state lives here and is passed explicitly into each
//! operation; there are no globals. A session is constructed once,
//! mutated through its methods, and replaced wholesale by `reset`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use tally_shared::types::{ApplicationId, TransactionId};
use tally_shared::{AppResult, Settings};

use crate::cashflow::CashFlowStatement;
use crate::ledger::{AccountType, ChartOfAccounts, Ledger, Transaction};
use crate::payroll::{Employee, PayrollRecord, PayrollService};
use crate::period::Period;
use crate::underwriting::{
    ApplicationStatus, Decision, Evaluation, LoanApplication, UnderwritingError,
    UnderwritingService,
};

/// All mutable state for one user session.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    chart: ChartOfAccounts,
    ledger: Ledger,
    applications: Vec<LoanApplication>,
    employees: Vec<Employee>,
    payroll_records: Vec<PayrollRecord>,
    cash_flow: Option<CashFlowStatement>,
}

impl Session {
    /// Creates a fresh, empty session.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let ledger = Ledger::new(settings.ledger.strict_balancing);
        Self {
            settings,
            chart: ChartOfAccounts::new(),
            ledger,
            applications: Vec::new(),
            employees: Vec::new(),
            payroll_records: Vec::new(),
            cash_flow: None,
        }
    }

    /// Discards all session data, keeping the settings.
    pub fn reset(&mut self) {
        info!("session reset");
        let settings = self.settings.clone();
        *self = Self::new(settings);
    }

    /// Effective settings for this session.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The chart of accounts.
    #[must_use]
    pub fn chart(&self) -> &ChartOfAccounts {
        &self.chart
    }

    /// The ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// All loan applications in submission order.
    #[must_use]
    pub fn applications(&self) -> &[LoanApplication] {
        &self.applications
    }

    /// The employee roster.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All payroll records across runs.
    #[must_use]
    pub fn payroll_records(&self) -> &[PayrollRecord] {
        &self.payroll_records
    }

    /// The imported cash-flow statement, if any.
    #[must_use]
    pub fn cash_flow(&self) -> Option<&CashFlowStatement> {
        self.cash_flow.as_ref()
    }

    /// Registers an account in the chart.
    pub fn add_account(
        &mut self,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> AppResult<()> {
        self.chart.add_account(name, account_type)?;
        Ok(())
    }

    /// Records a transaction in the ledger.
    pub fn record_transaction(&mut self, tx: Transaction) -> AppResult<()> {
        self.ledger.record(tx)?;
        Ok(())
    }

    /// Edits the category of a recorded transaction.
    pub fn set_transaction_category(
        &mut self,
        id: TransactionId,
        category: Option<String>,
    ) -> AppResult<()> {
        self.ledger.set_category(id, category)?;
        Ok(())
    }

    /// Submits a loan application for later evaluation.
    pub fn submit_application(&mut self, application: LoanApplication) -> AppResult<ApplicationId> {
        UnderwritingService::validate_submission(&application)?;
        let id = application.id;
        debug!(%id, applicant = %application.applicant_code, "application submitted");
        self.applications.push(application);
        Ok(id)
    }

    /// Applications still awaiting a decision.
    pub fn pending_applications(&self) -> impl Iterator<Item = &LoanApplication> {
        self.applications
            .iter()
            .filter(|app| app.status.is_pending())
    }

    /// Evaluates an application against the configured thresholds without
    /// deciding it.
    pub fn evaluate_application(&self, id: ApplicationId) -> AppResult<Evaluation> {
        let application = self
            .applications
            .iter()
            .find(|app| app.id == id)
            .ok_or(UnderwritingError::ApplicationNotFound(id))?;
        let evaluation =
            UnderwritingService::evaluate(application, &self.settings.underwriting)?;
        Ok(evaluation)
    }

    /// Evaluates and decides a pending application.
    ///
    /// An approval flips the status and journals the disbursement; a
    /// denial only flips the status. Deciding an already-decided
    /// application is rejected.
    pub fn decide_application(&mut self, id: ApplicationId) -> AppResult<Evaluation> {
        let application = self
            .applications
            .iter_mut()
            .find(|app| app.id == id)
            .ok_or(UnderwritingError::ApplicationNotFound(id))?;
        if !application.status.is_pending() {
            return Err(UnderwritingError::AlreadyDecided(id).into());
        }

        let evaluation =
            UnderwritingService::evaluate(application, &self.settings.underwriting)?;
        match evaluation.decision {
            Decision::Approve => {
                application.status = ApplicationStatus::Approved;
                let disbursement = UnderwritingService::disbursement(application);
                info!(%id, applicant = %application.applicant_code, "application approved");
                self.ledger.record(disbursement)?;
            }
            Decision::Deny => {
                application.status = ApplicationStatus::Denied;
                info!(
                    %id,
                    violations = evaluation.violations.len(),
                    "application denied"
                );
            }
        }
        Ok(evaluation)
    }

    /// Adds an employee, or replaces the existing one with the same code.
    pub fn upsert_employee(&mut self, employee: Employee) -> AppResult<()> {
        PayrollService::validate_employee(&employee)?;
        match self
            .employees
            .iter_mut()
            .find(|existing| existing.code == employee.code)
        {
            Some(existing) => *existing = employee,
            None => self.employees.push(employee),
        }
        Ok(())
    }

    /// Runs payroll for the whole roster, storing the records and
    /// journaling the run as of the period's end date.
    pub fn run_payroll(&mut self, period: Period) -> AppResult<Vec<PayrollRecord>> {
        let records =
            PayrollService::run_payroll(&self.employees, &self.settings.payroll, period)?;
        for entry in PayrollService::journal_entries(&records, period.end) {
            self.ledger.record(entry)?;
        }
        self.payroll_records.extend(records.iter().cloned());
        info!(employees = records.len(), "payroll run recorded");
        Ok(records)
    }

    /// Imports a cash-flow template, replacing any previous statement.
    pub fn import_cash_flow(&mut self, data: &[u8]) -> AppResult<()> {
        let statement = crate::cashflow::import_template(data)?;
        self.cash_flow = Some(statement);
        Ok(())
    }

    /// Returns true if any data has been entered this session.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        !self.ledger.is_empty()
            || !self.applications.is_empty()
            || !self.employees.is_empty()
            || self.cash_flow.is_some()
    }

    /// Records a simple balanced entry: one amount, debited and credited.
    pub fn record_entry(
        &mut self,
        date: NaiveDate,
        description: impl Into<String>,
        debit_account: impl Into<String>,
        credit_account: impl Into<String>,
        amount: Decimal,
    ) -> AppResult<TransactionId> {
        let tx = Transaction::new(date, description, debit_account, amount, credit_account, amount);
        let id = tx.id;
        self.ledger.record(tx)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_shared::types::EmployeeId;

    use crate::payroll::PayType;
    use crate::underwriting::LoanType;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn session() -> Session {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
        Session::new(Settings::default())
    }

    fn application() -> LoanApplication {
        LoanApplication {
            id: ApplicationId::new(),
            applicant_code: "APP001".into(),
            applicant_name: "John Doe".into(),
            loan_type: LoanType::Housing,
            monthly_income: dec!(5000),
            existing_debt_payments: dec!(1000),
            credit_score: 700,
            loan_amount: dec!(200000),
            term_years: 30,
            annual_rate: dec!(4.0),
            asset_value: dec!(250000),
            date_submitted: date(3, 23),
            status: ApplicationStatus::Pending,
        }
    }

    fn employee() -> Employee {
        Employee {
            id: EmployeeId::new(),
            code: "EMP001".into(),
            name: "Jane Roe".into(),
            pay_type: PayType::Hourly {
                rate: dec!(25),
                hours_per_period: dec!(80),
            },
        }
    }

    #[test]
    fn test_reset_clears_data_keeps_settings() {
        let mut settings = Settings::default();
        settings.ledger.strict_balancing = true;
        let mut session = Session::new(settings);

        session
            .record_entry(date(3, 1), "Sale", "Cash", "Sales Revenue", dec!(500))
            .unwrap();
        session.submit_application(application()).unwrap();
        assert!(session.has_activity());

        session.reset();
        assert!(!session.has_activity());
        assert!(session.ledger().is_empty());
        assert!(session.applications().is_empty());
        // Strict balancing survives the reset.
        assert!(session.ledger().is_strict());
    }

    #[test]
    fn test_approval_journals_disbursement() {
        let mut session = session();
        let id = session.submit_application(application()).unwrap();
        assert_eq!(session.pending_applications().count(), 1);

        let evaluation = session.decide_application(id).unwrap();
        assert_eq!(evaluation.decision, Decision::Approve);
        assert_eq!(session.pending_applications().count(), 0);

        // The disbursement landed in the ledger.
        assert_eq!(session.ledger().len(), 1);
        let tx = &session.ledger().transactions()[0];
        assert_eq!(tx.debit_account, "Loans Receivable");
        assert_eq!(tx.debit_amount, dec!(200000));
    }

    #[test]
    fn test_denial_does_not_journal() {
        let mut session = session();
        let mut app = application();
        app.credit_score = 500;
        let id = session.submit_application(app).unwrap();

        let evaluation = session.decide_application(id).unwrap();
        assert_eq!(evaluation.decision, Decision::Deny);
        assert!(session.ledger().is_empty());
        assert!(!session.applications()[0].status.is_pending());
    }

    #[test]
    fn test_double_decision_is_rejected() {
        let mut session = session();
        let id = session.submit_application(application()).unwrap();
        session.decide_application(id).unwrap();

        let err = session.decide_application(id).unwrap_err();
        assert_eq!(err.error_code(), "BUSINESS_RULE_VIOLATION");
    }

    #[test]
    fn test_unknown_application_is_not_found() {
        let session = session();
        let err = session
            .evaluate_application(ApplicationId::new())
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_upsert_employee_replaces_by_code() {
        let mut session = session();
        session.upsert_employee(employee()).unwrap();

        let mut updated = employee();
        updated.pay_type = PayType::Salaried {
            annual_salary: dec!(60000),
        };
        session.upsert_employee(updated).unwrap();

        assert_eq!(session.employees().len(), 1);
        assert!(matches!(
            session.employees()[0].pay_type,
            PayType::Salaried { .. }
        ));
    }

    #[test]
    fn test_payroll_without_employees_is_not_ready() {
        let mut session = session();
        let period = Period::new(date(3, 1), date(3, 15)).unwrap();
        let err = session.run_payroll(period).unwrap_err();
        assert_eq!(err.error_code(), "NOT_READY");
    }

    #[test]
    fn test_payroll_run_journals_balanced_entries() {
        let mut session = session();
        session.upsert_employee(employee()).unwrap();

        let period = Period::new(date(3, 1), date(3, 15)).unwrap();
        let records = session.run_payroll(period).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(session.payroll_records().len(), 1);

        assert!(!session.ledger().is_empty());
        assert!(session.ledger().is_balanced());
        // Entries are dated at period end.
        assert!(session
            .ledger()
            .transactions()
            .iter()
            .all(|tx| tx.date == date(3, 15)));
    }

    #[test]
    fn test_import_cash_flow() {
        let template = "\
Item,Jan-YY
CASH RECEIPTS,
Cash Sales,1000
TOTAL CASH RECEIPTS,1000
CASH PAID OUT,
Rent,400
TOTAL CASH PAID OUT,400
";
        let mut session = session();
        session.import_cash_flow(template.as_bytes()).unwrap();
        let statement = session.cash_flow().unwrap();
        assert_eq!(statement.total_inflow(), dec!(1000));
        assert_eq!(statement.net_cash_flow(), dec!(600));
    }

    #[test]
    fn test_failed_import_leaves_previous_statement() {
        let good = "\
Item,Jan-YY
CASH RECEIPTS,
Cash Sales,1000
TOTAL CASH RECEIPTS,1000
CASH PAID OUT,
TOTAL CASH PAID OUT,0
";
        let mut session = session();
        session.import_cash_flow(good.as_bytes()).unwrap();

        let err = session.import_cash_flow(b"Item,Jan-YY\n").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        // The earlier import is untouched.
        assert!(session.cash_flow().is_some());
        assert_eq!(session.cash_flow().unwrap().total_inflow(), dec!(1000));
    }

    #[test]
    fn test_duplicate_account_is_validation_error() {
        let mut session = session();
        session.add_account("Cash", AccountType::Asset).unwrap();
        let err = session.add_account("Cash", AccountType::Asset).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
