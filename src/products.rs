//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Backend identifier of a catalogue product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Garment style a product is made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfricanStyle {
    /// Dashiki style
    Dashiki,
    /// Kaftan style
    Kaftan,
    /// Agbada style
    Agbada,
    /// Boubou style
    Boubou,
    /// Kente inspired
    Kente,
    /// Ankara pattern
    Ankara,
    /// Mudcloth design
    Mudcloth,
    /// Traditional African
    Traditional,
    /// Modern African fusion
    ModernAfrican,
    /// Traditional crochet
    CrochetTraditional,
    /// Modern crochet
    CrochetModern,
}

impl AfricanStyle {
    /// Human readable label, as shown in the style picker.
    pub fn label(self) -> &'static str {
        match self {
            AfricanStyle::Dashiki => "Dashiki Style",
            AfricanStyle::Kaftan => "Kaftan Style",
            AfricanStyle::Agbada => "Agbada Style",
            AfricanStyle::Boubou => "Boubou Style",
            AfricanStyle::Kente => "Kente Inspired",
            AfricanStyle::Ankara => "Ankara Pattern",
            AfricanStyle::Mudcloth => "Mudcloth Design",
            AfricanStyle::Traditional => "Traditional African",
            AfricanStyle::ModernAfrican => "Modern African Fusion",
            AfricanStyle::CrochetTraditional => "Traditional Crochet",
            AfricanStyle::CrochetModern => "Modern Crochet",
        }
    }
}

/// Product snapshot as served by the catalogue.
///
/// Carts and wishlists keep their own copy, so later catalogue changes
/// (a price update, say) never leak into lines that already exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product id
    pub id: ProductId,

    /// Product title
    pub title: String,

    /// URL slug
    pub slug: String,

    /// Long description
    pub description: String,

    /// Unit price
    pub price: Money<'a, Currency>,

    /// Category slug, empty when uncategorised
    pub category: String,

    /// Garment style, if any
    pub african_style: Option<AfricanStyle>,

    /// Path of the primary image
    pub primary_image: Option<String>,

    /// Colours the product can be ordered in
    pub colors_available: Vec<String>,

    /// Sizes the product can be ordered in
    pub sizes_available: Vec<String>,

    /// Units on hand
    pub stock_quantity: u32,

    /// Made to order, so never out of stock
    pub is_custom_order: bool,

    /// Shown on the home page
    pub is_featured: bool,
}

impl<'a> Product<'a> {
    /// Creates a product with the given id, title and price; every other
    /// field is empty.
    pub fn new(id: ProductId, title: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: String::new(),
            description: String::new(),
            price,
            category: String::new(),
            african_style: None,
            primary_image: None,
            colors_available: Vec::new(),
            sizes_available: Vec::new(),
            stock_quantity: 0,
            is_custom_order: false,
            is_featured: false,
        }
    }

    /// Whether the product can be ordered right now.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0 || self.is_custom_order
    }
}
