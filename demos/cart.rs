//! Cart Example
//!
//! This example loads the sample catalogue, fills a cart and prints the
//! order summary.
//!
//! Use `-f` to load a different catalogue file
//! Use `-c` to load a storefront config
//! Use `-n` to limit the number of products added to the cart
//! Use `-s` to only add products matching a search term
//!
//! Set `RUST_LOG=storefront=debug` to see each state change.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront::{
    catalog::Catalog,
    config::StorefrontConfig,
    filters::FilterUpdate,
    options::LineOptions,
    session::User,
    store::Store,
    utils::ExampleCartArgs,
};

/// Cart Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = ExampleCartArgs::parse();

    let catalog = Catalog::from_file(&args.fixture)?;
    let config = StorefrontConfig::from_file(&args.config)?;

    let mut store = Store::new(config);

    store.set_user(Some(User {
        id: 1,
        username: "adaeze".to_string(),
        email: "adaeze@example.com".to_string(),
        first_name: "Adaeze".to_string(),
        last_name: "Okafor".to_string(),
    }));

    let mut update = FilterUpdate::default().in_stock(true);

    if let Some(search) = args.search {
        update = update.search(search);
    }

    store.update_filters(update);

    let picks: Vec<_> = catalog
        .filter(store.filters())
        .take(args.n.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    for (idx, product) in picks.iter().enumerate() {
        let options = match product.sizes_available.first() {
            Some(size) => LineOptions::new().with("size", size.as_str()),
            None => LineOptions::new(),
        };

        let quantity = u32::try_from(idx % 3 + 1)?;

        store.add_to_cart(product, quantity, options)?;
    }

    if let Some(product) = catalog.featured().next() {
        store.add_to_wishlist(product);
    }

    let summary = store.order_summary()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    summary.write_to(&mut handle, store.cart())?;

    if let Some(user) = store.user() {
        println!("\nSigned in as {}", user.display_name());
    }

    println!("Wishlist: {} product(s)", store.wishlist().len());

    Ok(())
}
