//! Cart Lines

use std::fmt;

use rusty_money::{Money, iso::Currency};
use uuid::Uuid;

use crate::{
    options::LineOptions,
    pricing::{TotalPriceError, line_price},
    products::{Product, ProductId},
};

/// Identifier of a cart line, generated when the line is first added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartId(Uuid);

impl CartId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CartId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A product snapshot with the chosen options and quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub(super) id: CartId,
    pub(super) product: Product<'a>,
    pub(super) quantity: u32,
    pub(super) options: LineOptions,
}

impl<'a> CartLine<'a> {
    pub(super) fn new(product: Product<'a>, quantity: u32, options: LineOptions) -> Self {
        Self {
            id: CartId::generate(),
            product,
            quantity,
            options,
        }
    }

    /// Line id
    pub fn id(&self) -> CartId {
        self.id
    }

    /// Product snapshot taken when the line was created.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Id of the product on this line
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Number of units, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected options
    pub fn options(&self) -> &LineOptions {
        &self.options
    }

    /// Snapshot unit price
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.product.price
    }

    /// Unit price times quantity.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the result does not fit in minor units.
    pub fn line_price(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        line_price(&self.product.price, self.quantity)
    }

    pub(super) fn matches(&self, product: ProductId, options: &LineOptions) -> bool {
        self.product.id == product && self.options == *options
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::NGN;
    use testresult::TestResult;

    use super::*;

    fn line<'a>() -> CartLine<'a> {
        CartLine::new(
            Product::new(ProductId(7), "Ankara Tote", Money::from_minor(1250, NGN)),
            3,
            LineOptions::new().with("color", "indigo"),
        )
    }

    #[test]
    fn line_price_uses_snapshot() -> TestResult {
        let line = line();

        assert_eq!(line.line_price()?, Money::from_minor(3750, NGN));
        assert_eq!(line.unit_price(), &Money::from_minor(1250, NGN));

        Ok(())
    }

    #[test]
    fn matches_requires_same_product_and_options() {
        let line = line();

        assert!(line.matches(ProductId(7), &LineOptions::new().with("color", "indigo")));
        assert!(!line.matches(ProductId(7), &LineOptions::new()));
        assert!(!line.matches(ProductId(8), &LineOptions::new().with("color", "indigo")));
    }

    #[test]
    fn new_lines_get_fresh_ids() {
        assert_ne!(line().id(), line().id());
    }
}
