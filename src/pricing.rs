//! Prices

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Unit price times quantity does not fit in minor units.
    #[error("line price overflowed ({0} units)")]
    Overflow(u32),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Price of `quantity` units at `unit` price.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the result cannot be represented in minor units.
pub fn line_price<'a>(
    unit: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let minor = unit
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(TotalPriceError::Overflow(quantity))?;

    Ok(Money::from_minor(minor, unit.currency()))
}

/// Sum of `price × quantity` over `lines`, zero in `currency` when there are none.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: a line price overflowed.
/// - [`TotalPriceError::Money`]: wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a: 'b, 'b>(
    lines: impl IntoIterator<Item = (&'b Money<'a, Currency>, u32)>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    lines
        .into_iter()
        .try_fold(
            Money::from_minor(0, currency),
            |acc, (unit, quantity)| -> Result<_, TotalPriceError> {
                Ok(acc.add(line_price(unit, quantity)?)?)
            },
        )
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, NGN};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn line_price_multiplies_unit_price() -> TestResult {
        let unit = Money::from_minor(250, NGN);

        assert_eq!(line_price(&unit, 4)?, Money::from_minor(1000, NGN));

        Ok(())
    }

    #[test]
    fn line_price_overflow_returns_error() {
        let unit = Money::from_minor(i64::MAX, NGN);

        assert_eq!(line_price(&unit, 2), Err(TotalPriceError::Overflow(2)));
    }

    #[test]
    fn test_total_price() -> TestResult {
        let a = Money::from_minor(100, NGN);
        let b = Money::from_minor(200, NGN);

        assert_eq!(
            total_price([(&a, 2), (&b, 3)], NGN)?,
            Money::from_minor(800, NGN)
        );

        Ok(())
    }

    #[test]
    fn test_total_price_empty() -> TestResult {
        let lines: [(&Money<'_, Currency>, u32); 0] = [];

        assert_eq!(total_price(lines, NGN)?, Money::from_minor(0, NGN));

        Ok(())
    }

    #[test]
    fn test_total_price_currency_mismatch() {
        let a = Money::from_minor(100, GBP);

        assert!(matches!(
            total_price([(&a, 1)], NGN),
            Err(TotalPriceError::Money(_))
        ));
    }
}
