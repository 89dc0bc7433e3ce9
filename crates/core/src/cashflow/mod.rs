//! 12-month cash-flow tables and the fixed-layout template importer.

pub mod error;
pub mod month;
pub mod template;
pub mod types;

pub use error::CashFlowError;
pub use month::{Month, MonthlySeries};
pub use template::import_template;
pub use types::{CashFlowStatement, MonthFlow};
