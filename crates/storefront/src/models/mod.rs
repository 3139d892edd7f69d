//! Domain models for the storefront page.

pub mod cart;

pub use cart::{LineItem, Product};

/// Persistence keys shared by everything that reads or writes page storage.
pub mod keys {
    /// Key for the serialized cart line items.
    pub const CART_ITEMS: &str = "cartItems";
}
