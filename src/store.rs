//! Store
//!
//! The single owned aggregate behind the storefront views: cart, wishlist,
//! filters, session and UI toggles. Build one per session and pass it to
//! whatever needs it; every command mutates it immediately.

use rusty_money::{Money, iso::Currency};
use tracing::{debug, info, warn};

use crate::{
    cart::{Cart, CartError, CartId, QuantityUpdate},
    config::StorefrontConfig,
    filters::{FilterUpdate, Filters},
    options::LineOptions,
    pricing::TotalPriceError,
    products::{Product, ProductId},
    session::{Session, User},
    summary::{OrderSummary, SummaryError},
    ui::UiState,
    wishlist::Wishlist,
};

/// Storefront session state.
#[derive(Debug, Clone)]
pub struct Store<'a> {
    config: StorefrontConfig,
    cart: Cart<'a>,
    wishlist: Wishlist<'a>,
    filters: Filters,
    session: Session,
    ui: UiState,
}

impl Default for Store<'_> {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

impl<'a> Store<'a> {
    /// Create an empty store priced and filtered according to `config`.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            cart: Cart::new(config.currency),
            wishlist: Wishlist::new(),
            filters: Filters::with_price_range(config.price_range),
            session: Session::default(),
            ui: UiState::default(),
            config,
        }
    }

    /// Add `quantity` units of `product` with `options`, merging into an
    /// existing line for the same product and options.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the quantity is zero, the product is priced
    /// in another currency or the merged quantity overflows.
    pub fn add_to_cart(
        &mut self,
        product: &Product<'a>,
        quantity: u32,
        options: LineOptions,
    ) -> Result<CartId, CartError> {
        match self.cart.add(product, quantity, options) {
            Ok(cart_id) => {
                debug!(%cart_id, product_id = %product.id, quantity, "added to cart");
                Ok(cart_id)
            }
            Err(err) => {
                warn!(product_id = %product.id, quantity, error = %err, "rejected add to cart");
                Err(err)
            }
        }
    }

    /// Remove a cart line. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, cart_id: CartId) -> bool {
        let removed = self.cart.remove(cart_id).is_some();

        debug!(%cart_id, removed, "remove from cart");

        removed
    }

    /// Set a line's quantity; zero or less removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if `quantity` exceeds `u32::MAX`.
    pub fn update_quantity(
        &mut self,
        cart_id: CartId,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartError> {
        let update = self.cart.update_quantity(cart_id, quantity)?;

        debug!(%cart_id, quantity, ?update, "update quantity");

        Ok(update)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();

        debug!("cleared cart");
    }

    /// Open or close the cart drawer.
    pub fn toggle_cart(&mut self) -> bool {
        self.ui.toggle_cart()
    }

    /// Open or close the mobile menu.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.ui.toggle_mobile_menu()
    }

    /// Sum of price times quantity over the cart, at the prices lines were added at.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if a line price overflows.
    pub fn cart_total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        self.cart.total()
    }

    /// Units in the cart, for the cart badge.
    pub fn cart_items_count(&self) -> u64 {
        self.cart.items_count()
    }

    /// Subtotal, shipping, tax and total for checkout.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if any amount cannot be computed.
    pub fn order_summary(&self) -> Result<OrderSummary<'a>, SummaryError> {
        OrderSummary::for_cart(&self.cart, &self.config)
    }

    /// Save a product to the wishlist. Returns `false` if it was already there.
    pub fn add_to_wishlist(&mut self, product: &Product<'a>) -> bool {
        let added = self.wishlist.add(product);

        debug!(product_id = %product.id, added, "add to wishlist");

        added
    }

    /// Remove a product from the wishlist. Returns `false` if it was not there.
    pub fn remove_from_wishlist(&mut self, product: ProductId) -> bool {
        let removed = self.wishlist.remove(product).is_some();

        debug!(product_id = %product, removed, "remove from wishlist");

        removed
    }

    /// Whether `product` is on the wishlist.
    pub fn is_in_wishlist(&self, product: ProductId) -> bool {
        self.wishlist.contains(product)
    }

    /// Sign a user in, or out when `None`.
    pub fn set_user(&mut self, user: Option<User>) {
        info!(user_id = ?user.as_ref().map(|u| u.id), "set user");

        self.session.set_user(user);
    }

    /// Sign out. The cart is not kept across sessions, so it is emptied too.
    pub fn logout(&mut self) {
        let user = self.session.clear();
        self.cart.clear();

        info!(user_id = ?user.map(|u| u.id), "logged out");
    }

    /// Shallow-merge `update` into the current filters.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        debug!(?update, "update filters");

        self.filters.apply(update);
    }

    /// Reset filters to their defaults, starting from the configured price range.
    pub fn clear_filters(&mut self) {
        self.filters = Filters::with_price_range(self.config.price_range);
    }

    /// The cart
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// The wishlist
    pub fn wishlist(&self) -> &Wishlist<'a> {
        &self.wishlist
    }

    /// Current filters
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Signed-in user
    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Whether the cart drawer is open.
    pub fn is_cart_open(&self) -> bool {
        self.ui.is_cart_open()
    }

    /// Whether the mobile menu is open.
    pub fn is_mobile_menu_open(&self) -> bool {
        self.ui.is_mobile_menu_open()
    }

    /// Session configuration
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}
