/// monthly capitalization - compare against simple accrual and print the monthly table
use chrono::NaiveDate;
use interest_accrual_rs::{
    aggregate_by_month, compute_monthly_capitalized_accrual, compute_simple_accrual,
    CalculationInput, Money, Rate,
};
use rust_decimal_macros::dec;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    // start mid-month so the last partial month stays uncapitalized
    let input = CalculationInput::new(
        6,
        Money::from_major(10_000),
        Rate::from_percentage(dec!(3.75)),
        NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("invalid start date")?,
    )?;

    let simple = compute_simple_accrual(&input);
    let capitalized = compute_monthly_capitalized_accrual(&input);

    println!("=== monthly capitalization ===\n");
    for month in aggregate_by_month(&capitalized) {
        println!("{}", month);
    }

    println!();
    println!("simple total interest:      {}", simple.total_interest().round_dp(2));
    println!("capitalized total interest: {}", capitalized.total_interest().round_dp(2));
    if let Some(balance) = capitalized.final_balance() {
        println!("final balance:              {}", balance.round_dp(2));
    }

    Ok(())
}
