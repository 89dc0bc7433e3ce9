//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application settings.
///
/// Every field has a serde default, so a bare environment yields a usable
/// configuration. Values can be overridden by layered config files or
/// `TALLY`-prefixed environment variables (e.g.
/// `TALLY__LEDGER__STRICT_BALANCING=true`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Ledger behaviour.
    #[serde(default)]
    pub ledger: LedgerSettings,
    /// Underwriting thresholds.
    #[serde(default)]
    pub underwriting: UnderwritingSettings,
    /// Payroll withholding rates.
    #[serde(default)]
    pub payroll: PayrollSettings,
}

/// Ledger behaviour settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    /// When true, reject transactions whose debit amount differs from the
    /// credit amount. Lenient mode accepts them and lets the trial balance
    /// report the gap as a warning.
    #[serde(default)]
    pub strict_balancing: bool,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            strict_balancing: false,
        }
    }
}

/// Underwriting decision thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct UnderwritingSettings {
    /// Maximum debt-to-income ratio, in percent.
    #[serde(default = "default_max_dti")]
    pub max_dti: Decimal,
    /// Maximum loan-to-value ratio, in percent. Only checked when
    /// collateral is present.
    #[serde(default = "default_max_ltv")]
    pub max_ltv: Decimal,
    /// Minimum acceptable credit score.
    #[serde(default = "default_min_credit_score")]
    pub min_credit_score: u16,
}

fn default_max_dti() -> Decimal {
    Decimal::new(43, 0)
}

fn default_max_ltv() -> Decimal {
    Decimal::new(80, 0)
}

fn default_min_credit_score() -> u16 {
    620
}

impl Default for UnderwritingSettings {
    fn default() -> Self {
        Self {
            max_dti: default_max_dti(),
            max_ltv: default_max_ltv(),
            min_credit_score: default_min_credit_score(),
        }
    }
}

/// Payroll withholding rates.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollSettings {
    /// Federal income tax rate as a fraction (0.15 = 15%).
    #[serde(default = "default_federal_tax_rate")]
    pub federal_tax_rate: Decimal,
    /// State income tax rate as a fraction.
    #[serde(default = "default_state_tax_rate")]
    pub state_tax_rate: Decimal,
    /// Flat insurance deduction per employee per pay period.
    #[serde(default = "default_insurance_per_employee")]
    pub insurance_per_employee: Decimal,
    /// Employer payroll tax rate (e.g. Social Security/Medicare) as a
    /// fraction.
    #[serde(default = "default_employer_tax_rate")]
    pub employer_tax_rate: Decimal,
}

fn default_federal_tax_rate() -> Decimal {
    Decimal::new(15, 2)
}

fn default_state_tax_rate() -> Decimal {
    Decimal::new(5, 2)
}

fn default_insurance_per_employee() -> Decimal {
    Decimal::new(50, 0)
}

fn default_employer_tax_rate() -> Decimal {
    Decimal::new(765, 4)
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            federal_tax_rate: default_federal_tax_rate(),
            state_tax_rate: default_state_tax_rate(),
            insurance_per_employee: default_insurance_per_employee(),
            employer_tax_rate: default_employer_tax_rate(),
        }
    }
}

impl Settings {
    /// Loads settings from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
