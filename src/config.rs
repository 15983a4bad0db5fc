use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_date;
use crate::decimal::{Money, Rate};
use crate::errors::{AccrualError, Result};
use crate::types::{AccrualMethod, CalculationInput, TableView};

/// user-facing calculator parameters, as entered on the input form
///
/// The rate is a percentage (3.5 means 3.5% p.a.) and the start date is an
/// optional `YYYY-MM-DD` string; a missing start date means today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub principal: Money,
    pub term_months: u32,
    pub annual_rate_percent: Decimal,
    pub start_date: Option<String>,
    pub method: AccrualMethod,
    pub table: TableView,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            principal: Money::from_major(10_000),
            term_months: 12,
            annual_rate_percent: dec!(3.5),
            start_date: None,
            method: AccrualMethod::Simple,
            table: TableView::None,
        }
    }
}

impl CalculatorConfig {
    /// savings account with interest paid out (not reinvested)
    pub fn simple(principal: Money, term_months: u32, annual_rate_percent: Decimal) -> Self {
        Self {
            principal,
            term_months,
            annual_rate_percent,
            ..Self::default()
        }
    }

    /// savings account crediting interest at every month-end
    pub fn monthly_capitalization(
        principal: Money,
        term_months: u32,
        annual_rate_percent: Decimal,
    ) -> Self {
        Self {
            method: AccrualMethod::MonthlyCapitalization,
            ..Self::simple(principal, term_months, annual_rate_percent)
        }
    }

    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_table(mut self, table: TableView) -> Self {
        self.table = table;
        self
    }

    /// parse from json; omitted fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AccrualError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_rate_percent)
    }

    /// resolve the start date, falling back to today's date on `time_provider`
    pub fn resolve_start_date(&self, time_provider: &SafeTimeProvider) -> Result<NaiveDate> {
        match &self.start_date {
            Some(raw) => parse_date(raw),
            None => Ok(time_provider.now().date_naive()),
        }
    }

    /// validate and convert into engine input
    pub fn to_input(&self, time_provider: &SafeTimeProvider) -> Result<CalculationInput> {
        let start_date = self.resolve_start_date(time_provider)?;
        CalculationInput::new(self.term_months, self.principal, self.annual_rate(), start_date)
    }
}
