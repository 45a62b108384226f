//! Money parsing helpers shared by configuration and catalogue loading.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, NGN, USD},
};
use thiserror::Error;

/// Errors from parsing currency codes, prices and rates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Look up a supported ISO currency by code.
///
/// # Errors
///
/// Returns [`MoneyParseError::UnknownCurrency`] for codes the storefront does not sell in.
pub fn parse_currency(code: &str) -> Result<&'static Currency, MoneyParseError> {
    match code.trim() {
        "NGN" => Ok(NGN),
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(MoneyParseError::UnknownCurrency(other.to_string())),
    }
}

/// Parse a price string (e.g. `"2500 NGN"` or `"12.50 GBP"`).
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal number or if the currency is not supported.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, MoneyParseError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MoneyParseError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| MoneyParseError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| MoneyParseError::InvalidPrice(s.to_string()))?;

    Ok(Money::from_minor(minor_units, parse_currency(code)?))
}

/// Parse a rate written either as percent points (`"7.5%"`) or as a fraction (`"0.075"`).
///
/// # Errors
///
/// Returns [`MoneyParseError::InvalidPercentage`] if the number cannot be parsed.
pub fn parse_percentage(s: &str) -> Result<Percentage, MoneyParseError> {
    let trimmed = s.trim();

    let (number, points) = match trimmed.strip_suffix('%') {
        Some(points) => (points.trim(), true),
        None => (trimmed, false),
    };

    let value = number
        .parse::<Decimal>()
        .map_err(|_err| MoneyParseError::InvalidPercentage(s.to_string()))?;

    if points {
        Ok(Percentage::from(value / Decimal::ONE_HUNDRED))
    } else {
        Ok(Percentage::from(value))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_reads_amount_and_currency() -> TestResult {
        assert_eq!(parse_price("2500 NGN")?, Money::from_minor(250_000, NGN));
        assert_eq!(parse_price("12.50 GBP")?, Money::from_minor(1250, GBP));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        assert!(matches!(
            parse_price("2500NGN"),
            Err(MoneyParseError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("25 00 NGN"),
            Err(MoneyParseError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("lots NGN"),
            Err(MoneyParseError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(MoneyParseError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_percentage_accepts_points_and_fractions() -> TestResult {
        let points = parse_percentage("7.5%")?;
        let fraction = parse_percentage(" 0.075 ")?;

        assert_eq!(points, fraction);
        assert_eq!(points * Decimal::ONE, Decimal::new(75, 3));

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_garbage() {
        assert!(matches!(
            parse_percentage("vat"),
            Err(MoneyParseError::InvalidPercentage(_))
        ));
    }
}
