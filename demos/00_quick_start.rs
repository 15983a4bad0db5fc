/// quick start - one year of simple daily interest
use interest_accrual_rs::{Calculator, CalculatorConfig, Money, Rate};
use rust_decimal_macros::dec;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    // 10,000 at 3.5% p.a. for 12 months, starting today
    let config = CalculatorConfig::simple(Money::from_major(10_000), 12, dec!(3.5));
    let report = Calculator::system().calculate(&config)?;

    println!(
        "daily rate: {} / 365 = {}",
        Rate::from_percentage(config.annual_rate_percent),
        report.summary.daily_rate
    );
    println!(
        "total interest over {} months: {}",
        report.input.term_months,
        report.summary.total_interest.round_dp(2)
    );
    println!("number of days: {}", report.summary.day_count);
    println!(
        "mean daily interest: {}",
        report.summary.mean_daily_interest.round_dp(2)
    );

    Ok(())
}
