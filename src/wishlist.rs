//! Wishlist

use crate::products::{Product, ProductId};

/// Saved products, at most one entry per product.
#[derive(Debug, Clone, Default)]
pub struct Wishlist<'a> {
    products: Vec<Product<'a>>,
}

impl<'a> Wishlist<'a> {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a snapshot of `product`.
    ///
    /// Returns `false` if the product was already saved, in which case the
    /// stored snapshot is left as it was.
    pub fn add(&mut self, product: &Product<'a>) -> bool {
        if self.contains(product.id) {
            return false;
        }

        self.products.push(product.clone());

        true
    }

    /// Remove a product, returning its snapshot if it was saved.
    pub fn remove(&mut self, product: ProductId) -> Option<Product<'a>> {
        let idx = self.products.iter().position(|p| p.id == product)?;

        Some(self.products.remove(idx))
    }

    /// Whether `product` is saved.
    pub fn contains(&self, product: ProductId) -> bool {
        self.products.iter().any(|p| p.id == product)
    }

    /// Iterate over saved products, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::NGN};

    use super::*;

    fn wrap<'a>() -> Product<'a> {
        Product::new(ProductId(3), "Mudcloth Wrap", Money::from_minor(8_000, NGN))
    }

    #[test]
    fn add_then_contains() {
        let mut wishlist = Wishlist::new();

        assert!(wishlist.add(&wrap()));
        assert!(wishlist.contains(ProductId(3)));
        assert!(!wishlist.contains(ProductId(4)));
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let mut wishlist = Wishlist::new();

        assert!(wishlist.add(&wrap()));
        assert!(!wishlist.add(&wrap()));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn first_snapshot_wins() {
        let mut wishlist = Wishlist::new();
        let mut repriced = wrap();
        repriced.price = Money::from_minor(9_000, NGN);

        wishlist.add(&wrap());
        wishlist.add(&repriced);

        let prices: Vec<i64> = wishlist.iter().map(|p| p.price.to_minor_units()).collect();

        assert_eq!(prices, vec![8_000]);
    }

    #[test]
    fn remove_clears_membership() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&wrap());

        let removed = wishlist.remove(ProductId(3));

        assert_eq!(removed.map(|p| p.id), Some(ProductId(3)));
        assert!(!wishlist.contains(ProductId(3)));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn remove_unknown_product_is_a_no_op() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&wrap());

        assert!(wishlist.remove(ProductId(99)).is_none());
        assert_eq!(wishlist.len(), 1);
    }
}
