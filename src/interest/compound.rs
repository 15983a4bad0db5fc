use log::{debug, warn};

use crate::calendar::is_month_end;
use crate::decimal::Money;
use crate::interest::{AccrualEngine, DailyRecord, Series};
use crate::types::{AccrualMethod, CalculationInput};

/// accrues daily on a running balance and credits the month's interest on its last day
///
/// A term that stops before a month-end leaves that partial month's interest in
/// the cumulative total but never adds it to the balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyCapitalizationEngine;

impl AccrualEngine for MonthlyCapitalizationEngine {
    fn method(&self) -> AccrualMethod {
        AccrualMethod::MonthlyCapitalization
    }

    fn accrue(&self, input: &CalculationInput) -> Series {
        debug!(
            "monthly capitalization: principal {} at {} from {} for {} days",
            input.principal(),
            input.annual_rate(),
            input.start_date(),
            input.day_count()
        );

        let rate = input.annual_rate();
        let mut balance = input.principal();
        let mut monthly_accumulator = Money::ZERO;
        let mut cumulative_interest = Money::ZERO;
        let mut records = Vec::with_capacity(input.day_count() as usize);

        for date in input.days() {
            let daily_interest = balance.daily_interest(rate);
            cumulative_interest += daily_interest;
            monthly_accumulator += daily_interest;

            if is_month_end(date) {
                balance += monthly_accumulator;
                monthly_accumulator = Money::ZERO;
            }

            records.push(DailyRecord {
                date,
                daily_interest,
                cumulative_interest,
                balance: Some(balance),
            });
        }

        if !monthly_accumulator.is_zero() {
            warn!(
                "term ends {} mid-month; {} of accrued interest was not capitalized",
                input.end_date(),
                monthly_accumulator
            );
        }

        Series::new(AccrualMethod::MonthlyCapitalization, records)
    }
}
