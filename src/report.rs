//! serializable results handed to the presentation layer
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::interest::{DailyRecord, Series};
use crate::summary::{aggregate_by_month, MonthlySummary};
use crate::types::{AccrualMethod, CalculationInput, TableView};

/// everything a dashboard needs to render one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualReport {
    pub method: AccrualMethod,
    pub input: InputView,
    pub summary: SummaryView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputView {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub total_interest: Money,
    pub mean_daily_interest: Money,
    pub day_count: u32,
    /// annual rate / 365
    pub daily_rate: Rate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_balance: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "rows", rename_all = "snake_case")]
pub enum Table {
    Daily(Vec<DailyRecord>),
    Monthly(Vec<MonthlySummary>),
}

impl Table {
    pub fn len(&self) -> usize {
        match self {
            Table::Daily(rows) => rows.len(),
            Table::Monthly(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AccrualReport {
    pub fn build(input: &CalculationInput, series: &Series, view: TableView) -> Self {
        let table = match view {
            TableView::None => None,
            TableView::Daily => Some(Table::Daily(series.records().to_vec())),
            TableView::Monthly => Some(Table::Monthly(aggregate_by_month(series))),
        };

        AccrualReport {
            method: series.method,
            input: InputView {
                principal: input.principal(),
                annual_rate: input.annual_rate(),
                term_months: input.term_months(),
                start_date: input.start_date(),
                end_date: input.end_date(),
            },
            summary: SummaryView {
                total_interest: series.total_interest(),
                mean_daily_interest: series.mean_daily_interest(),
                day_count: series.day_count(),
                daily_rate: input.annual_rate().daily_rate(),
                final_balance: series.final_balance(),
            },
            table,
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::{compute_monthly_capitalized_accrual, compute_simple_accrual};
    use rust_decimal_macros::dec;

    fn input() -> CalculationInput {
        CalculationInput::new(
            1,
            Money::from_major(10_000),
            Rate::from_percentage(dec!(3.5)),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_summary_without_table() {
        let input = input();
        let series = compute_simple_accrual(&input);
        let report = AccrualReport::build(&input, &series, TableView::None);

        assert_eq!(report.method, AccrualMethod::Simple);
        assert_eq!(report.summary.day_count, 31);
        assert_eq!(
            report.summary.total_interest,
            Money::from_str_exact("29.72602741").unwrap()
        );
        assert_eq!(
            report.summary.mean_daily_interest,
            Money::from_str_exact("0.95890411").unwrap()
        );
        assert_eq!(report.summary.final_balance, None);
        assert_eq!(report.input.end_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(report.table.is_none());
    }

    #[test]
    fn test_tables() {
        let input = input();
        let series = compute_monthly_capitalized_accrual(&input);

        let daily = AccrualReport::build(&input, &series, TableView::Daily);
        assert!(matches!(&daily.table, Some(Table::Daily(rows)) if rows.len() == 31));

        let monthly = AccrualReport::build(&input, &series, TableView::Monthly);
        assert!(matches!(&monthly.table, Some(Table::Monthly(rows)) if rows.len() == 1));
        assert_eq!(monthly.summary.final_balance, series.final_balance());
    }

    #[test]
    fn test_json_shape() {
        let input = input();
        let series = compute_simple_accrual(&input);
        let report = AccrualReport::build(&input, &series, TableView::Monthly);

        let json = report.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["method"], "simple");
        assert_eq!(value["input"]["start_date"], "2024-01-01");
        assert_eq!(value["summary"]["total_interest"], "29.72602741");
        assert_eq!(value["table"]["view"], "monthly");
        assert_eq!(value["table"]["rows"][0]["days"], 31);
        assert!(value["summary"].get("final_balance").is_none());

        let parsed: AccrualReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
