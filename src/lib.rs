pub mod calculator;
pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod report;
pub mod summary;
pub mod types;

// re-export key types
pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{AccrualError, Result};
pub use interest::{
    compute_monthly_capitalized_accrual, compute_simple_accrual, AccrualEngine, DailyRecord,
    MonthlyCapitalizationEngine, Series, SimpleAccrualEngine,
};
pub use report::{AccrualReport, Table};
pub use summary::{aggregate_by_month, MonthlySummary};
pub use types::{AccrualMethod, CalculationInput, TableView};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
