//! UI toggles

/// Open/closed state of the cart drawer and the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    cart_open: bool,
    mobile_menu_open: bool,
}

impl UiState {
    /// Flip the cart drawer, returning the new state.
    pub fn toggle_cart(&mut self) -> bool {
        self.cart_open = !self.cart_open;
        self.cart_open
    }

    /// Flip the mobile menu, returning the new state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Whether the cart drawer is open.
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Whether the mobile menu is open.
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }
}
