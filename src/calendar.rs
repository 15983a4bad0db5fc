//! calendar arithmetic for accrual terms

use chrono::{Datelike, Months, NaiveDate};

use crate::errors::{AccrualError, Result};

/// exclusive end of a term of `months` calendar months starting at `start`
///
/// month overflow clamps to the last valid day of the target month, so
/// 2024-01-31 plus one month is 2024-02-29.
pub fn term_end_date(start: NaiveDate, months: u32) -> Result<NaiveDate> {
    start
        .checked_add_months(Months::new(months))
        .ok_or(AccrualError::DateOutOfRange { start, months })
}

/// number of calendar days in `[start, start + months)`
pub fn days_in_term(start: NaiveDate, months: u32) -> Result<u32> {
    let end = term_end_date(start, months)?;
    Ok((end - start).num_days() as u32)
}

/// true when the following day falls in a different calendar month
pub fn is_month_end(date: NaiveDate) -> bool {
    match date.succ_opt() {
        Some(next) => next.month() != date.month(),
        None => true,
    }
}

/// first day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| AccrualError::InvalidDate {
        message: format!("'{}' is not a YYYY-MM-DD date: {}", input, e),
    })
}
