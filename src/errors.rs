use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccrualError {
    #[error("invalid principal: {amount} (must not be negative)")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate} (must not be negative)")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid term: {months} months (must be at least one month)")]
    InvalidTerm {
        months: u32,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("date out of range: {start} plus {months} months")]
    DateOutOfRange {
        start: NaiveDate,
        months: u32,
    },

    #[error("calculation out of range: {principal} at {rate} over {months} months")]
    CalculationOutOfRange {
        principal: Money,
        rate: Rate,
        months: u32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, AccrualError>;
