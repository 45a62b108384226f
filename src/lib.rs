//! Storefront
//!
//! Client-side shopping state for an African-fashion storefront: a cart with
//! option-aware line merging, a wishlist, product filters, the signed-in user
//! and UI toggles, all held in one owned [`store::Store`].

pub mod cart;
pub mod catalog;
pub mod config;
pub mod filters;
pub mod money;
pub mod options;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod session;
pub mod store;
pub mod summary;
pub mod ui;
pub mod utils;
pub mod wishlist;
