//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartId, CartLine, QuantityUpdate},
    catalog::{Catalog, CatalogError},
    config::{ConfigError, StorefrontConfig},
    filters::{FilterUpdate, Filters, PriceRange},
    money::{MoneyParseError, parse_price},
    options::LineOptions,
    pricing::TotalPriceError,
    products::{AfricanStyle, Product, ProductId},
    session::{Session, User},
    store::Store,
    summary::{OrderSummary, SummaryError},
    ui::UiState,
    wishlist::Wishlist,
};
