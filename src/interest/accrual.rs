use log::debug;

use crate::decimal::Money;
use crate::interest::{AccrualEngine, DailyRecord, Series};
use crate::types::{AccrualMethod, CalculationInput};

/// accrues interest on the original principal only
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAccrualEngine;

impl AccrualEngine for SimpleAccrualEngine {
    fn method(&self) -> AccrualMethod {
        AccrualMethod::Simple
    }

    fn accrue(&self, input: &CalculationInput) -> Series {
        debug!(
            "simple accrual: principal {} at {} from {} for {} days",
            input.principal(),
            input.annual_rate(),
            input.start_date(),
            input.day_count()
        );

        // principal never changes, so neither does the daily amount
        let daily_interest = input.principal().daily_interest(input.annual_rate());
        let mut cumulative_interest = Money::ZERO;
        let mut records = Vec::with_capacity(input.day_count() as usize);

        for date in input.days() {
            cumulative_interest += daily_interest;
            records.push(DailyRecord {
                date,
                daily_interest,
                cumulative_interest,
                balance: None,
            });
        }

        Series::new(AccrualMethod::Simple, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_log::test;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run(months: u32, principal: i64, rate_pct: Decimal, start: NaiveDate) -> Series {
        let input = CalculationInput::new(
            months,
            Money::from_major(principal),
            Rate::from_percentage(rate_pct),
            start,
        )
        .unwrap();
        SimpleAccrualEngine.accrue(&input)
    }

    #[test]
    fn test_one_month_from_january() {
        let series = run(1, 10_000, dec!(3.5), date(2024, 1, 1));

        assert_eq!(series.len(), 31);
        for record in &series {
            assert_eq!(record.daily_interest.round_dp(6), Money::from_decimal(dec!(0.958904)));
            assert_eq!(record.balance, None);
        }
        assert_eq!(series.total_interest().round_dp(3), Money::from_decimal(dec!(29.726)));
    }

    #[test]
    fn test_length_matches_calendar_days() {
        assert_eq!(run(1, 1_000, dec!(2), date(2024, 2, 1)).len(), 29);
        assert_eq!(run(1, 1_000, dec!(2), date(2023, 2, 1)).len(), 28);
        assert_eq!(run(12, 1_000, dec!(2), date(2024, 1, 1)).len(), 366);
        assert_eq!(run(24, 1_000, dec!(2), date(2023, 3, 15)).len(), 731);
        assert_eq!(run(1, 1_000, dec!(2), date(2024, 1, 31)).len(), 29);
    }

    #[test]
    fn test_dates_are_contiguous() {
        let series = run(3, 5_000, dec!(4), date(2023, 12, 20));

        assert_eq!(series.first_date(), Some(date(2023, 12, 20)));
        assert_eq!(series.last_date(), Some(date(2024, 3, 19)));
        for pair in series.records().windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_cumulative_strictly_increases() {
        let series = run(6, 2_500, dec!(1.25), date(2024, 5, 10));

        let first = series.records()[0].daily_interest;
        for pair in series.records().windows(2) {
            assert!(pair[1].cumulative_interest > pair[0].cumulative_interest);
            assert_eq!(pair[1].daily_interest, first);
        }
    }

    #[test]
    fn test_zero_rate_accrues_nothing() {
        let series = run(2, 10_000, dec!(0), date(2024, 1, 1));

        assert_eq!(series.len(), 60);
        assert!(series.iter().all(|r| r.daily_interest.is_zero()));
        assert_eq!(series.total_interest(), Money::ZERO);
    }

    #[test]
    fn test_zero_principal_accrues_nothing() {
        let series = run(1, 0, dec!(5), date(2024, 1, 1));
        assert_eq!(series.total_interest(), Money::ZERO);
    }

    #[test]
    fn test_idempotent() {
        let first = run(18, 7_500, dec!(3.1), date(2024, 8, 31));
        let second = run(18, 7_500, dec!(3.1), date(2024, 8, 31));
        assert_eq!(first, second);
    }
}
