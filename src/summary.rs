//! Order Summary

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, config::StorefrontConfig, pricing::TotalPriceError};

/// Errors that can occur when building or rendering an order summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Error calculating the cart subtotal.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Tax could not be represented in minor units.
    #[error("tax calculation overflowed")]
    TaxConversion,

    /// IO error while writing the summary.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Checkout totals for a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    subtotal: Money<'a, Currency>,
    shipping: Money<'a, Currency>,
    tax: Money<'a, Currency>,
    total: Money<'a, Currency>,
    items_count: u64,
    lines: usize,
}

impl<'a> OrderSummary<'a> {
    /// Price `cart` with the shipping and tax settings from `config`.
    ///
    /// An empty cart is not charged shipping.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if the subtotal overflows, tax cannot be
    /// represented or the configured shipping is in another currency.
    pub fn for_cart(cart: &Cart<'a>, config: &StorefrontConfig) -> Result<Self, SummaryError> {
        let subtotal = cart.total()?;

        let shipping = if cart.is_empty() {
            Money::from_minor(0, cart.currency())
        } else {
            config.shipping
        };

        let tax = tax_on(&subtotal, &config.tax_rate)?;
        let total = subtotal.add(shipping)?.add(tax)?;

        Ok(Self {
            subtotal,
            shipping,
            tax,
            total,
            items_count: cart.items_count(),
            lines: cart.len(),
        })
    }

    /// Cart total before shipping and tax
    pub fn subtotal(&self) -> &Money<'a, Currency> {
        &self.subtotal
    }

    /// Shipping charge
    pub fn shipping(&self) -> &Money<'a, Currency> {
        &self.shipping
    }

    /// Tax on the subtotal
    pub fn tax(&self) -> &Money<'a, Currency> {
        &self.tax
    }

    /// Amount due
    pub fn total(&self) -> &Money<'a, Currency> {
        &self.total
    }

    /// Units in the cart
    pub fn items_count(&self) -> u64 {
        self.items_count
    }

    /// Distinct cart lines
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Render the cart lines and these totals as a text table.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if a line price overflows or writing fails.
    pub fn write_to(&self, mut out: impl io::Write, cart: &Cart<'_>) -> Result<(), SummaryError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Options", "Unit Price", "Qty", "Line Total"]);

        for (idx, line) in cart.iter().enumerate() {
            builder.push_record([
                format!("#{}", idx + 1),
                line.product().title.clone(),
                line.options().to_string(),
                line.unit_price().to_string(),
                line.quantity().to_string(),
                line.line_price()?.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..6), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "\n{table}")?;

        for (label, value) in [
            ("Subtotal:", &self.subtotal),
            ("Shipping:", &self.shipping),
            ("Tax:", &self.tax),
            ("Total:", &self.total),
        ] {
            writeln!(out, " {label:<10}{:>20}", value.to_string())?;
        }

        writeln!(out, " {} item(s) in {} line(s)", self.items_count, self.lines)?;

        Ok(())
    }
}

/// `rate` of `amount`, rounded to minor units half away from zero.
fn tax_on<'a>(
    amount: &Money<'a, Currency>,
    rate: &Percentage,
) -> Result<Money<'a, Currency>, SummaryError> {
    let minor = amount
        .amount()
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|value| value.round_dp(0))
        .filter(|value| value.to_i64().is_some())
        .ok_or(SummaryError::TaxConversion)?;

    let tax = ((*rate) * Decimal::ONE)
        .checked_mul(minor)
        .ok_or(SummaryError::TaxConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(SummaryError::TaxConversion)?;

    Ok(Money::from_minor(tax, amount.currency()))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::NGN;
    use testresult::TestResult;

    use crate::{
        options::LineOptions,
        products::{Product, ProductId},
    };

    use super::*;

    fn cart<'a>() -> Result<Cart<'a>, crate::cart::CartError> {
        let mut cart = Cart::new(NGN);

        cart.add(
            &Product::new(ProductId(1), "Boubou Gown", Money::from_minor(2_000_000, NGN)),
            2,
            LineOptions::new().with("size", "L"),
        )?;
        cart.add(
            &Product::new(ProductId(2), "Beaded Necklace", Money::from_minor(500_000, NGN)),
            1,
            LineOptions::new(),
        )?;

        Ok(cart)
    }

    #[test]
    fn totals_include_shipping_and_tax() -> TestResult {
        let cart = cart()?;
        let summary = OrderSummary::for_cart(&cart, &StorefrontConfig::default())?;

        assert_eq!(summary.subtotal(), &Money::from_minor(4_500_000, NGN));
        assert_eq!(summary.shipping(), &Money::from_minor(250_000, NGN));
        assert_eq!(summary.tax(), &Money::from_minor(337_500, NGN));
        assert_eq!(summary.total(), &Money::from_minor(5_087_500, NGN));
        assert_eq!(summary.items_count(), 3);
        assert_eq!(summary.lines(), 2);

        Ok(())
    }

    #[test]
    fn empty_cart_summary_is_zero() -> TestResult {
        let cart = Cart::new(NGN);
        let summary = OrderSummary::for_cart(&cart, &StorefrontConfig::default())?;

        assert_eq!(summary.total(), &Money::from_minor(0, NGN));
        assert_eq!(summary.shipping(), &Money::from_minor(0, NGN));
        assert_eq!(summary.items_count(), 0);

        Ok(())
    }

    #[test]
    fn tax_rounds_half_away_from_zero() -> TestResult {
        let rate = Percentage::from(Decimal::new(75, 3));

        assert_eq!(
            tax_on(&Money::from_minor(10, NGN), &rate)?,
            Money::from_minor(1, NGN)
        );
        assert_eq!(
            tax_on(&Money::from_minor(20, NGN), &rate)?,
            Money::from_minor(2, NGN)
        );

        Ok(())
    }

    #[test]
    fn tax_overflow_returns_error() {
        let rate = Percentage::from(Decimal::TWO);

        let result = tax_on(&Money::from_minor(i64::MAX, NGN), &rate);

        assert!(matches!(result, Err(SummaryError::TaxConversion)));
    }

    #[test]
    fn subtotal_beyond_minor_units_returns_error() -> TestResult {
        let mut cart = Cart::new(NGN);
        let half = i64::MAX / 2 + 1;

        for id in [1, 2] {
            cart.add(
                &Product::new(ProductId(id), "Gold Thread Agbada", Money::from_minor(half, NGN)),
                1,
                LineOptions::new(),
            )?;
        }

        let result = OrderSummary::for_cart(&cart, &StorefrontConfig::default());

        assert!(matches!(result, Err(SummaryError::TaxConversion)));

        Ok(())
    }

    #[test]
    fn write_to_renders_lines_and_totals() -> TestResult {
        let cart = cart()?;
        let summary = OrderSummary::for_cart(&cart, &StorefrontConfig::default())?;

        let mut out = Vec::new();
        summary.write_to(&mut out, &cart)?;
        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Boubou Gown"), "missing line title");
        assert!(rendered.contains("size: L"), "missing line options");
        assert!(rendered.contains("Total:"), "missing total label");
        assert!(
            rendered.contains(&summary.total().to_string()),
            "missing total amount"
        );
        assert!(rendered.contains("3 item(s) in 2 line(s)"), "missing counts");

        Ok(())
    }
}
