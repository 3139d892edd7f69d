//! Cart state store.
//!
//! [`CartStore`] is the single owner of the cart's line items. Each mutation
//! runs to completion in three steps: change the in-memory list, write it to
//! the [`PersistenceBackend`], then notify the [`CartView`].
//!
//! Persistence is best-effort. A failed write is logged and the in-memory
//! state stays authoritative; the next successful write catches storage up.
//! A missing or unreadable stored value loads as an empty cart. Money
//! arithmetic is checked, and a change that would push a figure out of
//! `Decimal` range is discarded.

use rust_decimal::Decimal;
use tracing::instrument;
use vitrine_core::ItemId;

use crate::config::CartConfig;
use crate::models::{LineItem, Product, cart};

pub mod backend;
pub mod totals;
pub mod view;
#[cfg(feature = "web")]
pub mod web;

pub use backend::{MemoryBackend, PersistenceBackend, PersistenceError};
pub use totals::Totals;
pub use view::{CartEvent, CartSnapshot, CartView};
#[cfg(feature = "web")]
pub use web::LocalStorageBackend;

/// The shopping cart: line items, their persistence, and derived totals.
#[derive(Debug)]
pub struct CartStore<B, V = ()> {
    backend: B,
    view: V,
    config: CartConfig,
    items: Vec<LineItem>,
    totals: Totals,
}

impl<B: PersistenceBackend, V: CartView> CartStore<B, V> {
    /// Restore the cart from `backend`.
    ///
    /// Never fails: unreadable storage, a malformed value, or a stored cart
    /// whose figures overflow yields an empty cart. The view is not notified;
    /// call [`snapshot`](Self::snapshot) for the initial render.
    #[instrument(skip(backend, view, config), fields(key = %config.storage_key))]
    pub fn load(backend: B, view: V, config: CartConfig) -> Self {
        let (items, totals) = read_items(&backend, &config);
        tracing::debug!(lines = items.len(), "Cart restored");
        Self {
            backend,
            view,
            config,
            items,
            totals,
        }
    }

    /// Discard in-memory state and restore it from the backend again.
    #[instrument(skip(self), fields(key = %self.config.storage_key))]
    pub fn reload(&mut self) {
        (self.items, self.totals) = read_items(&self.backend, &self.config);
    }

    /// Add one unit of `product`, appending a new line if it is not in the cart.
    ///
    /// Discarded with a warning if the new figures would not fit in a `Decimal`.
    pub fn add_item(&mut self, product: Product) {
        let before = self.items.clone();
        let id = product.id.clone();
        let existing = self.items.iter_mut().find(|item| item.id == id);
        let quantity = match existing {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                item.quantity
            }
            None => {
                self.items.push(LineItem::from_product(product));
                1
            }
        };

        tracing::debug!(item_id = %id, quantity, "Item added to cart");
        self.commit(before, CartEvent::Added { id, quantity });
    }

    /// Remove the line for `id`. Does nothing if there is no such line.
    pub fn remove_item(&mut self, id: &ItemId) {
        let before = self.items.clone();
        self.items.retain(|item| &item.id != id);
        if self.items.len() == before.len() {
            return;
        }

        tracing::debug!(item_id = %id, "Item removed from cart");
        self.commit(before, CartEvent::Removed { id: id.clone() });
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line. Does nothing if there is
    /// no such line. Discarded with a warning if the new figures would not
    /// fit in a `Decimal`.
    pub fn update_quantity(&mut self, id: &ItemId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(id);
            return;
        }

        let before = self.items.clone();
        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return;
        };
        item.quantity = quantity;

        tracing::debug!(item_id = %id, quantity, "Cart quantity updated");
        self.commit(
            before,
            CartEvent::QuantityChanged {
                id: id.clone(),
                quantity,
            },
        );
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        let before = std::mem::take(&mut self.items);
        tracing::debug!("Cart cleared");
        self.commit(before, CartEvent::Cleared);
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub const fn subtotal(&self) -> Decimal {
        self.totals.subtotal
    }

    /// Shipping for the current subtotal.
    #[must_use]
    pub const fn shipping(&self) -> Decimal {
        self.totals.shipping
    }

    /// Subtotal plus shipping.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.totals.total
    }

    /// Units in the cart (the header badge).
    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.totals.item_count
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The line for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current contents and figures, e.g. for opening the cart modal.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot<'_> {
        CartSnapshot::from_totals(&self.items, self.totals, self.config.currency)
    }

    /// Cart settings in effect.
    #[must_use]
    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    /// The persistence backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// The rendering collaborator.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Recompute the figures, then persist and notify. A change whose
    /// figures overflow is rolled back to `before` instead.
    fn commit(&mut self, before: Vec<LineItem>, event: CartEvent) {
        let Some(totals) = Totals::compute(&self.items, &self.config) else {
            tracing::warn!(?event, "Cart figures out of range, change discarded");
            self.items = before;
            return;
        };
        self.totals = totals;

        self.persist();
        let snapshot = CartSnapshot::from_totals(&self.items, self.totals, self.config.currency);
        self.view.on_change(&event, &snapshot);
    }

    fn persist(&mut self) {
        let encoded = match serde_json::to_string(&self.items) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode cart, keeping in-memory state");
                return;
            }
        };

        if let Err(e) = self.backend.set(&self.config.storage_key, &encoded) {
            tracing::warn!(
                key = %self.config.storage_key,
                error = %e,
                "Failed to persist cart, keeping in-memory state"
            );
        }
    }
}

/// Read and normalize the stored line items, falling back to an empty cart.
fn read_items<B: PersistenceBackend>(backend: &B, config: &CartConfig) -> (Vec<LineItem>, Totals) {
    let key = config.storage_key.as_str();
    let empty = || (Vec::new(), Totals::empty(config));

    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return empty(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored cart, starting empty");
            return empty();
        }
    };

    let items = match serde_json::from_str::<Vec<LineItem>>(&raw) {
        Ok(records) => cart::normalize(records),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored cart is malformed, starting empty");
            return empty();
        }
    };

    match Totals::compute(&items, config) {
        Some(totals) => (items, totals),
        None => {
            tracing::warn!(key, "Stored cart figures are out of range, starting empty");
            empty()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<CartEvent>,
        counts: Vec<u64>,
    }

    impl CartView for Recorder {
        fn on_change(&mut self, event: &CartEvent, snapshot: &CartSnapshot<'_>) {
            self.events.push(event.clone());
            self.counts.push(snapshot.item_count);
        }
    }

    fn product(id: i64, price: i64) -> Product {
        Product::new(id, format!("Produto {id}"), format!("img/{id}.png"), Decimal::from(price))
    }

    fn store() -> CartStore<MemoryBackend, Recorder> {
        CartStore::load(MemoryBackend::new(), Recorder::default(), CartConfig::default())
    }

    fn stored(store: &CartStore<MemoryBackend, Recorder>) -> Option<String> {
        store.backend().get("cartItems").unwrap()
    }

    #[test]
    fn test_load_from_empty_storage() {
        let store = store();
        assert!(store.is_empty());
        assert_eq!(store.subtotal(), Decimal::ZERO);
        assert!(store.view().events.is_empty());
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn test_repeated_adds_accumulate_quantity() {
        let mut store = store();
        for _ in 0..5 {
            store.add_item(product(1, 10));
        }

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.get(&ItemId::from(1)).unwrap().quantity, 5);
        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut store = store();
        store.add_item(product(3, 1));
        store.add_item(product(1, 1));
        store.add_item(product(3, 1));

        let ids: Vec<_> = store.items().iter().map(|item| item.id.clone()).collect();
        assert_eq!(ids, vec![ItemId::from(3), ItemId::from(1)]);
    }

    #[test]
    fn test_add_notifies_with_new_quantity() {
        let mut store = store();
        store.add_item(product(1, 10));
        store.add_item(product(1, 10));

        assert_eq!(
            store.view().events,
            vec![
                CartEvent::Added {
                    id: ItemId::from(1),
                    quantity: 1
                },
                CartEvent::Added {
                    id: ItemId::from(1),
                    quantity: 2
                },
            ]
        );
        assert_eq!(store.view().counts, vec![1, 2]);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut store = store();
        store.add_item(product(1, 10));
        let after_add: Vec<LineItem> = serde_json::from_str(&stored(&store).unwrap()).unwrap();
        assert_eq!(after_add, store.items());

        store.update_quantity(&ItemId::from(1), 4);
        let after_update: Vec<LineItem> =
            serde_json::from_str(&stored(&store).unwrap()).unwrap();
        assert_eq!(after_update[0].quantity, 4);

        store.clear();
        assert_eq!(stored(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_missing_item_is_silent() {
        let mut store = store();
        store.add_item(product(1, 10));
        store.remove_item(&ItemId::from(99));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.view().events.len(), 1);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for quantity in [0, -1, -40] {
            let mut store = store();
            store.add_item(product(1, 10));
            store.add_item(product(2, 10));

            store.update_quantity(&ItemId::from(1), quantity);

            assert!(store.get(&ItemId::from(1)).is_none());
            assert_eq!(
                store.view().events.last(),
                Some(&CartEvent::Removed {
                    id: ItemId::from(1)
                })
            );
        }
    }

    #[test]
    fn test_update_quantity_missing_item_is_silent() {
        let mut store = store();
        store.update_quantity(&ItemId::from(5), 3);

        assert!(store.is_empty());
        assert!(store.view().events.is_empty());
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn test_numeric_and_text_ids_are_distinct_lines() {
        let mut store = store();
        store.add_item(product(1, 10));
        store.add_item(Product::new("1", "Texto", "t.png", Decimal::from(5)));

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.subtotal(), Decimal::from(15));
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let backend = MemoryBackend::with_quota(16);
        let mut store = CartStore::load(backend, Recorder::default(), CartConfig::default());

        store.add_item(product(1, 10));

        assert_eq!(store.item_count(), 1);
        assert_eq!(store.view().events.len(), 1);
        assert_eq!(store.backend().get("cartItems").unwrap(), None);
    }

    #[test]
    fn test_unreadable_storage_loads_empty() {
        let backend = MemoryBackend::new();
        backend.set_unavailable(true);
        let store = CartStore::load(backend, (), CartConfig::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        for raw in ["{oops", "null", "{\"id\": 1}", "[{\"id\": 1}]", "[1, 2]"] {
            let mut backend = MemoryBackend::new();
            backend.set("cartItems", raw).unwrap();
            let store = CartStore::load(backend, (), CartConfig::default());
            assert!(store.is_empty(), "expected empty cart for {raw}");
        }
    }

    #[test]
    fn test_load_normalizes_stored_lines() {
        let mut backend = MemoryBackend::new();
        backend
            .set(
                "cartItems",
                r#"[
                    {"id": 1, "name": "A", "image": "a.png", "price": 10, "quantity": 1},
                    {"id": 2, "name": "B", "image": "b.png", "price": 20, "quantity": 0},
                    {"id": 1, "name": "A", "image": "a.png", "price": 10, "quantity": 2}
                ]"#,
            )
            .unwrap();

        let store = CartStore::load(backend, (), CartConfig::default());

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_stored_cart_out_of_range_loads_empty() {
        let mut backend = MemoryBackend::new();
        backend
            .set(
                "cartItems",
                r#"[{"id": 1, "name": "A", "image": "a.png", "price": 1e28, "quantity": 10}]"#,
            )
            .unwrap();

        let store = CartStore::load(backend, (), CartConfig::default());

        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::from(15));
        assert_eq!(store.snapshot().total.display(), "R$ 15,00");
    }

    #[test]
    fn test_update_quantity_out_of_range_is_discarded() {
        let price = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
        let mut store = store();
        store.add_item(Product::new(1, "Lote", "l.png", price));
        let persisted = stored(&store);

        store.update_quantity(&ItemId::from(1), i64::MAX);

        assert_eq!(store.get(&ItemId::from(1)).unwrap().quantity, 1);
        assert_eq!(store.total(), price);
        assert_eq!(store.view().events.len(), 1);
        assert_eq!(stored(&store), persisted);
    }

    #[test]
    fn test_add_item_out_of_range_is_discarded() {
        let mut store = store();
        store.add_item(Product::new(1, "A", "a.png", Decimal::MAX));

        store.add_item(Product::new(2, "B", "b.png", Decimal::MAX));
        store.add_item(Product::new(1, "A", "a.png", Decimal::MAX));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.total(), Decimal::MAX);
        assert_eq!(store.view().events.len(), 1);
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let backend = MemoryBackend::new();
        let mut other_page = backend.clone();
        let mut store = CartStore::load(backend, (), CartConfig::default());
        store.add_item(product(1, 10));

        other_page.set("cartItems", "[]").unwrap();
        store.reload();

        assert!(store.is_empty());
    }

    #[test]
    fn test_custom_storage_key() {
        let config = CartConfig {
            storage_key: "promo:cart".to_string(),
            ..CartConfig::default()
        };
        let mut store = CartStore::load(MemoryBackend::new(), (), config);
        store.add_item(product(1, 10));

        assert!(store.backend().get("promo:cart").unwrap().is_some());
        assert!(store.backend().get("cartItems").unwrap().is_none());
    }
}
