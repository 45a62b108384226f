//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    options::LineOptions,
    pricing::{TotalPriceError, total_price},
    products::{Product, ProductId},
};

mod line;

pub use line::{CartId, CartLine};

/// Errors from cart commands. A failed command leaves the cart unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A line needs at least one unit.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// The product's price currency differs from the cart currency (product, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// The resulting quantity does not fit in a `u32`.
    #[error("quantity overflowed for line {0}")]
    QuantityOverflow(CartId),
}

/// What [`Cart::update_quantity`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line now holds the requested quantity.
    Updated,

    /// The requested quantity was zero or less, so the line was removed.
    Removed,

    /// No line has that id; nothing changed.
    Missing,
}

/// Shopping cart: ordered lines, at most one per product and option selection.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart priced in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of `product` with the given options.
    ///
    /// If a line for the same product and options exists its quantity is
    /// incremented, otherwise a new line is appended holding a snapshot of
    /// the product. Returns the id of the affected line.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: `quantity` is zero.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CartError::QuantityOverflow`]: the merged quantity overflows.
    pub fn add(
        &mut self,
        product: &Product<'a>,
        quantity: u32,
        options: LineOptions,
    ) -> Result<CartId, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product.id, &options))
        {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::QuantityOverflow(line.id))?;

            return Ok(line.id);
        }

        let line = CartLine::new(product.clone(), quantity, options);
        let id = line.id;

        self.lines.push(line);

        Ok(id)
    }

    /// Remove the line with the given id, returning it. Unknown ids are a no-op.
    pub fn remove(&mut self, id: CartId) -> Option<CartLine<'a>> {
        let idx = self.lines.iter().position(|line| line.id == id)?;

        Some(self.lines.remove(idx))
    }

    /// Set the quantity of a line. Zero or less removes it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if `quantity` exceeds `u32::MAX`.
    pub fn update_quantity(
        &mut self,
        id: CartId,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartError> {
        if quantity <= 0 {
            return Ok(match self.remove(id) {
                Some(_) => QuantityUpdate::Removed,
                None => QuantityUpdate::Missing,
            });
        }

        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return Ok(QuantityUpdate::Missing);
        };

        line.quantity =
            u32::try_from(quantity).map_err(|_err| CartError::QuantityOverflow(id))?;

        Ok(QuantityUpdate::Updated)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of snapshot price times quantity over all lines.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if a line price overflows.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(
            self.lines
                .iter()
                .map(|line| (line.unit_price(), line.quantity)),
            self.currency,
        )
    }

    /// Total number of units across all lines (not the number of lines).
    #[must_use]
    pub fn items_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Get a line by id.
    pub fn get(&self, id: CartId) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Get the line holding `product` with exactly these options.
    pub fn find(&self, product: ProductId, options: &LineOptions) -> Option<&CartLine<'a>> {
        self.lines
            .iter()
            .find(|line| line.matches(product, options))
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
