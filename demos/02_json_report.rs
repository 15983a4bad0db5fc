/// json report - what the presentation layer receives
use chrono::{TimeZone, Utc};
use interest_accrual_rs::{Calculator, CalculatorConfig, SafeTimeProvider, TableView, TimeSource};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let calculator = Calculator::new(time);

    let config = CalculatorConfig::from_json(
        r#"{
            "principal": "10000",
            "term_months": 3,
            "annual_rate_percent": "3.75",
            "method": "monthly_capitalization"
        }"#,
    )?
    .with_table(TableView::Monthly);

    let report = calculator.calculate(&config)?;
    println!("{}", report.to_json_pretty()?);

    // a malformed start date is reported, not defaulted
    let bad = config.clone().with_start_date("2024/01/01");
    if let Err(e) = calculator.calculate(&bad) {
        println!("\nrejected: {}", e);
    }

    Ok(())
}
