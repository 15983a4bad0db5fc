pub mod accrual;
pub mod compound;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;
use crate::types::{AccrualMethod, CalculationInput};

pub use accrual::SimpleAccrualEngine;
pub use compound::MonthlyCapitalizationEngine;

/// one day of accrued interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub daily_interest: Money,
    pub cumulative_interest: Money,
    /// balance after any capitalization on this day; only set when capitalizing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Money>,
}

impl fmt::Display for DailyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  interest {:>12}  cumulative {:>14}",
            self.date,
            self.daily_interest.round_dp(2),
            self.cumulative_interest.round_dp(2)
        )?;
        if let Some(balance) = self.balance {
            write!(f, "  balance {:>14}", balance.round_dp(2))?;
        }
        Ok(())
    }
}

/// ordered daily accrual records covering a whole term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub method: AccrualMethod,
    records: Vec<DailyRecord>,
}

impl Series {
    pub(crate) fn new(method: AccrualMethod, records: Vec<DailyRecord>) -> Self {
        Self { method, records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn day_count(&self) -> u32 {
        self.records.len() as u32
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// cumulative interest of the last record
    pub fn total_interest(&self) -> Money {
        self.records
            .last()
            .map(|r| r.cumulative_interest)
            .unwrap_or(Money::ZERO)
    }

    /// arithmetic mean of daily interest across the series
    pub fn mean_daily_interest(&self) -> Money {
        if self.records.is_empty() {
            return Money::ZERO;
        }
        let sum: Money = self.records.iter().map(|r| r.daily_interest).sum();
        sum / Decimal::from(self.records.len())
    }

    /// balance of the last record, for capitalizing series
    pub fn final_balance(&self) -> Option<Money> {
        self.records.last().and_then(|r| r.balance)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// a day-by-day accrual strategy
pub trait AccrualEngine {
    fn method(&self) -> AccrualMethod;

    /// compute the full daily series for `input`
    fn accrue(&self, input: &CalculationInput) -> Series;
}

impl AccrualMethod {
    /// engine implementing this method
    pub fn engine(&self) -> Box<dyn AccrualEngine> {
        match self {
            AccrualMethod::Simple => Box::new(SimpleAccrualEngine),
            AccrualMethod::MonthlyCapitalization => Box::new(MonthlyCapitalizationEngine),
        }
    }
}

/// daily interest on a fixed principal
pub fn compute_simple_accrual(input: &CalculationInput) -> Series {
    SimpleAccrualEngine.accrue(input)
}

/// daily interest with month-end capitalization into the balance
pub fn compute_monthly_capitalized_accrual(input: &CalculationInput) -> Series {
    MonthlyCapitalizationEngine.accrue(input)
}
