use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::decimal::{Money, Rate};
use crate::errors::{AccrualError, Result};

/// how accrued interest is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualMethod {
    /// interest on the fixed principal, never reinvested
    #[default]
    Simple,
    /// interest credited to the balance at each calendar month-end
    MonthlyCapitalization,
}

/// optional tabular view attached to a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableView {
    #[default]
    None,
    Daily,
    Monthly,
}

/// validated parameters of one accrual calculation
///
/// Only constructible through [`CalculationInput::new`], so an existing value
/// always has a non-negative principal and rate, a term of at least one month,
/// a representable end date, and amounts that stay within `Decimal` for the
/// whole term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationInput {
    term_months: u32,
    principal: Money,
    annual_rate: Rate,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl CalculationInput {
    pub fn new(
        term_months: u32,
        principal: Money,
        annual_rate: Rate,
        start_date: NaiveDate,
    ) -> Result<Self> {
        if term_months == 0 {
            return Err(AccrualError::InvalidTerm { months: term_months });
        }
        if principal.is_negative() {
            return Err(AccrualError::InvalidPrincipal { amount: principal });
        }
        if annual_rate.is_negative() {
            return Err(AccrualError::InvalidInterestRate { rate: annual_rate });
        }

        let end_date = calendar::term_end_date(start_date, term_months)?;
        let day_count = (end_date - start_date).num_days() as u32;

        if growth_bound(principal, annual_rate, day_count).is_none() {
            return Err(AccrualError::CalculationOutOfRange {
                principal,
                rate: annual_rate,
                months: term_months,
            });
        }

        Ok(Self {
            term_months,
            principal,
            annual_rate,
            start_date,
            end_date,
        })
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    /// annual rate as a fraction
    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// first day after the term (exclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn day_count(&self) -> u32 {
        (self.end_date - self.start_date).num_days() as u32
    }

    /// every day of the term in ascending order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |day| *day < self.end_date)
    }
}

/// upper bound on any amount an engine can produce over `days`
///
/// Daily compounding dominates both simple accrual and monthly capitalization,
/// and the doubled result leaves room for cumulative totals. `None` on overflow.
fn growth_bound(principal: Money, annual_rate: Rate, days: u32) -> Option<Decimal> {
    let daily_rate = annual_rate.daily_rate().as_decimal();
    let mut bound = principal.as_decimal();
    if bound.is_zero() || daily_rate.is_zero() {
        return Some(bound);
    }

    for _ in 0..days {
        bound = bound.checked_add(bound.checked_mul(daily_rate)?)?;
    }
    bound.checked_mul(Decimal::TWO)
}
