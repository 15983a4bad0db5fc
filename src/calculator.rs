use hourglass_rs::{SafeTimeProvider, TimeSource};
use log::info;

use crate::config::CalculatorConfig;
use crate::errors::Result;
use crate::interest::Series;
use crate::report::AccrualReport;
use crate::types::CalculationInput;

/// runs calculations for the presentation layer
///
/// Holds the clock that supplies "today" when a config has no start date.
/// Every call recomputes from scratch.
pub struct Calculator {
    time: SafeTimeProvider,
}

impl Calculator {
    pub fn new(time: SafeTimeProvider) -> Self {
        Self { time }
    }

    /// calculator on the system clock
    pub fn system() -> Self {
        Self::new(SafeTimeProvider::new(TimeSource::System))
    }

    /// validated engine input for `config`
    pub fn input(&self, config: &CalculatorConfig) -> Result<CalculationInput> {
        config.to_input(&self.time)
    }

    /// daily series for `config`
    pub fn series(&self, config: &CalculatorConfig) -> Result<Series> {
        let input = self.input(config)?;
        Ok(config.method.engine().accrue(&input))
    }

    /// full report for `config`, including the requested table
    pub fn calculate(&self, config: &CalculatorConfig) -> Result<AccrualReport> {
        let input = self.input(config)?;
        let series = config.method.engine().accrue(&input);
        let report = AccrualReport::build(&input, &series, config.table);

        info!(
            "{:?} accrual over {} months ({} days): total interest {}",
            report.method,
            input.term_months(),
            report.summary.day_count,
            report.summary.total_interest.round_dp(2)
        );

        Ok(report)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::system()
    }
}
