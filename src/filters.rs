//! Filters

use rust_decimal::Decimal;

use crate::products::{AfricanStyle, Product};

/// Inclusive price bounds in major currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    /// Lowest accepted price
    pub min: Decimal,

    /// Highest accepted price
    pub max: Decimal,
}

impl PriceRange {
    /// Create a range from `min` to `max` inclusive.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Whether `amount` falls inside the range.
    #[must_use]
    pub fn contains(&self, amount: Decimal) -> bool {
        self.min <= amount && amount <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(Decimal::ZERO, Decimal::ONE_THOUSAND)
    }
}

/// Product listing criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    /// Category slug; empty matches every category
    pub category: String,

    /// Garment style; `None` matches every style
    pub african_style: Option<AfricanStyle>,

    /// Accepted price range
    pub price_range: PriceRange,

    /// Only show products that can be ordered now
    pub in_stock: bool,

    /// Case-insensitive text matched against title and description
    pub search: String,
}

impl Filters {
    /// Default filters with a different price range.
    #[must_use]
    pub fn with_price_range(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Self::default()
        }
    }

    /// Shallow-merge the fields set in `update` into these filters.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }

        if let Some(style) = update.african_style {
            self.african_style = style;
        }

        if let Some(range) = update.price_range {
            self.price_range = range;
        }

        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }

        if let Some(search) = update.search {
            self.search = search;
        }
    }

    /// Whether `product` passes every criterion.
    pub fn matches(&self, product: &Product<'_>) -> bool {
        self.matches_search(product)
            && (self.category.is_empty() || self.category == product.category)
            && self
                .african_style
                .is_none_or(|style| product.african_style == Some(style))
            && self.price_range.contains(*product.price.amount())
            && (!self.in_stock || product.is_in_stock())
    }

    fn matches_search(&self, product: &Product<'_>) -> bool {
        let needle = self.search.to_lowercase();

        needle.is_empty()
            || product.title.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}

/// A partial [`Filters`] record; unset fields are left alone by [`Filters::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    /// New category slug
    pub category: Option<String>,

    /// New style; `Some(None)` clears it
    pub african_style: Option<Option<AfricanStyle>>,

    /// New price range
    pub price_range: Option<PriceRange>,

    /// New in-stock flag
    pub in_stock: Option<bool>,

    /// New search text
    pub search: Option<String>,
}

impl FilterUpdate {
    /// Set the category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set or clear the style.
    #[must_use]
    pub fn african_style(mut self, style: Option<AfricanStyle>) -> Self {
        self.african_style = Some(style);
        self
    }

    /// Set the price range.
    #[must_use]
    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// Set the in-stock flag.
    #[must_use]
    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Set the search text.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}
