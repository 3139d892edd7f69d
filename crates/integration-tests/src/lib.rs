//! Integration tests for Vitrine.
//!
//! Scenarios drive the storefront crate the way the page does: a
//! [`MemoryBackend`] stands in for `localStorage` and a [`RecordingView`]
//! stands in for the renderer.
//!
//! # Test Categories
//!
//! - `cart_lifecycle` - cart mutations, totals and persistence across reloads
//! - `cart_review` - the static review screen recalculation
//! - `page_widgets` - banner widgets and page setup

use rust_decimal::Decimal;
use vitrine_core::ItemId;
use vitrine_storefront::cart::{CartEvent, CartSnapshot, CartView, MemoryBackend};
use vitrine_storefront::config::CartConfig;
use vitrine_storefront::models::Product;

/// What a view saw on one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub event: CartEvent,
    pub item_count: u64,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub shipping_label: String,
}

/// A [`CartView`] that records every notification.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub renders: Vec<Render>,
}

impl RecordingView {
    /// The most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Render> {
        self.renders.last()
    }

    /// How many add acknowledgments were played.
    #[must_use]
    pub fn acknowledgments(&self) -> usize {
        self.renders.iter().filter(|r| r.event.is_add()).count()
    }
}

impl CartView for RecordingView {
    fn on_change(&mut self, event: &CartEvent, snapshot: &CartSnapshot<'_>) {
        self.renders.push(Render {
            event: event.clone(),
            item_count: snapshot.item_count,
            subtotal: snapshot.subtotal.amount,
            shipping: snapshot.shipping.amount,
            total: snapshot.total.amount,
            shipping_label: snapshot.shipping_label(),
        });
    }
}

/// A product with a whole-unit price.
#[must_use]
pub fn product(id: i64, price: i64) -> Product {
    Product::new(
        id,
        format!("Produto {id}"),
        format!("img/{id}.png"),
        Decimal::from(price),
    )
}

/// An item id from an integer.
#[must_use]
pub fn id(value: i64) -> ItemId {
    ItemId::from(value)
}

/// Raw value currently persisted under the default cart key.
#[must_use]
pub fn stored(backend: &MemoryBackend) -> Option<String> {
    use vitrine_storefront::cart::PersistenceBackend;

    backend.get(&CartConfig::default().storage_key).ok().flatten()
}
