use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::month_start;
use crate::decimal::Money;
use crate::interest::Series;

/// accrual totals for one calendar month of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// first day of the calendar month
    pub month: NaiveDate,
    /// days of this month covered by the series
    pub days: u32,
    pub interest: Money,
    /// cumulative interest on the month's last covered day
    pub cumulative_interest: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Money>,
}

impl MonthlySummary {
    pub fn year(&self) -> i32 {
        self.month.year()
    }

    pub fn month_number(&self) -> u32 {
        self.month.month()
    }
}

impl fmt::Display for MonthlySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  days {:>2}  interest {:>12}  cumulative {:>14}",
            self.month.format("%Y-%m"),
            self.days,
            self.interest.round_dp(2),
            self.cumulative_interest.round_dp(2)
        )?;
        if let Some(balance) = self.balance {
            write!(f, "  balance {:>14}", balance.round_dp(2))?;
        }
        Ok(())
    }
}

/// group a series by calendar month, ascending
pub fn aggregate_by_month(series: &Series) -> Vec<MonthlySummary> {
    let mut months: Vec<MonthlySummary> = Vec::new();

    for record in series {
        let month = month_start(record.date);
        if let Some(current) = months.last_mut().filter(|m| m.month == month) {
            current.days += 1;
            current.interest += record.daily_interest;
            current.cumulative_interest = record.cumulative_interest;
            current.balance = record.balance;
            continue;
        }
        months.push(MonthlySummary {
            month,
            days: 1,
            interest: record.daily_interest,
            cumulative_interest: record.cumulative_interest,
            balance: record.balance,
        });
    }

    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::interest::{compute_monthly_capitalized_accrual, compute_simple_accrual};
    use crate::types::CalculationInput;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(months: u32, start: NaiveDate) -> CalculationInput {
        CalculationInput::new(
            months,
            Money::from_major(10_000),
            Rate::from_percentage(dec!(3.5)),
            start,
        )
        .unwrap()
    }

    #[test]
    fn test_full_months() {
        let series = compute_simple_accrual(&input(3, date(2024, 1, 1)));
        let months = aggregate_by_month(&series);

        assert_eq!(months.len(), 3);
        assert_eq!(
            months.iter().map(|m| m.month).collect::<Vec<_>>(),
            vec![date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)]
        );
        assert_eq!(months.iter().map(|m| m.days).collect::<Vec<_>>(), vec![31, 29, 31]);
        assert_eq!(months[2].cumulative_interest, series.total_interest());
        assert_eq!(months[0].balance, None);
    }

    #[test]
    fn test_sums_match_daily_records() {
        let series = compute_simple_accrual(&input(5, date(2023, 10, 17)));
        let months = aggregate_by_month(&series);

        // partial first and last months
        assert_eq!(months.len(), 6);
        assert_eq!(months[0].days, 15);
        assert_eq!(months[5].days, 16);

        for summary in &months {
            let expected: Money = series
                .iter()
                .filter(|r| month_start(r.date) == summary.month)
                .map(|r| r.daily_interest)
                .sum();
            assert_eq!(summary.interest, expected);
        }

        let total: Money = months.iter().map(|m| m.interest).sum();
        assert_eq!(total, series.total_interest());
    }

    #[test]
    fn test_year_boundary_months_stay_separate() {
        let series = compute_simple_accrual(&input(13, date(2023, 12, 1)));
        let months = aggregate_by_month(&series);

        assert_eq!(months.len(), 13);
        assert_eq!(months[0].year(), 2023);
        assert_eq!(months[0].month_number(), 12);
        assert_eq!(months[12].year(), 2024);
        assert_eq!(months[12].month_number(), 12);
        assert!(months.windows(2).all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn test_capitalized_balance_is_month_end_balance() {
        let series = compute_monthly_capitalized_accrual(&input(2, date(2024, 1, 1)));
        let months = aggregate_by_month(&series);

        let principal = Money::from_major(10_000);
        assert_eq!(months[0].balance, Some(principal + months[0].interest));
        assert_eq!(months[1].balance, series.final_balance());
    }

    #[test]
    fn test_display() {
        let summary = MonthlySummary {
            month: date(2024, 2, 1),
            days: 29,
            interest: Money::from_str_exact("27.80821919").unwrap(),
            cumulative_interest: Money::from_str_exact("57.53424660").unwrap(),
            balance: None,
        };
        let line = summary.to_string();
        assert!(line.starts_with("2024-02"));
        assert!(line.contains("27.81"));
        assert!(!line.contains("balance"));
    }
}
