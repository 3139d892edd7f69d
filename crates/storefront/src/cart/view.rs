//! Rendering collaborator notified after every cart mutation.
//!
//! The store never touches the page. After each mutation it hands the view a
//! [`CartEvent`] describing what happened and a [`CartSnapshot`] with
//! everything needed to redraw the header badge and the cart modal.

use std::time::Duration;

use rust_decimal::Decimal;
use vitrine_core::{CurrencyCode, ItemId, Price};

use super::totals::Totals;
use crate::config::CartConfig;
use crate::models::LineItem;

/// Label the "add to cart" button shows after a click.
pub const ADDED_LABEL: &str = "Adicionado!";

/// How long the button keeps [`ADDED_LABEL`].
pub const ADDED_LABEL_DURATION: Duration = Duration::from_millis(1500);

/// How long the cart icon bounces after an add.
pub const BOUNCE_DURATION: Duration = Duration::from_millis(600);

/// Shipping label when shipping costs nothing.
pub const FREE_SHIPPING_LABEL: &str = "Grátis";

/// What a mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added; `quantity` is the line's new quantity.
    Added { id: ItemId, quantity: u32 },
    /// A line was removed.
    Removed { id: ItemId },
    /// A line's quantity was set.
    QuantityChanged { id: ItemId, quantity: u32 },
    /// Every line was removed.
    Cleared,
}

impl CartEvent {
    /// Whether the view should play the add-to-cart acknowledgment.
    #[must_use]
    pub const fn is_add(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// Cart contents and derived figures at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot<'a> {
    pub items: &'a [LineItem],
    pub item_count: u64,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl<'a> CartSnapshot<'a> {
    /// Compute the figures for `items` under `config`, or `None` if they
    /// overflow.
    #[must_use]
    pub fn new(items: &'a [LineItem], config: &CartConfig) -> Option<Self> {
        let totals = Totals::compute(items, config)?;
        Some(Self::from_totals(items, totals, config.currency))
    }

    /// Snapshot from figures already computed for `items`.
    #[must_use]
    pub const fn from_totals(
        items: &'a [LineItem],
        totals: Totals,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            items,
            item_count: totals.item_count,
            subtotal: Price::new(totals.subtotal, currency),
            shipping: Price::new(totals.shipping, currency),
            total: Price::new(totals.total, currency),
        }
    }

    /// Whether the empty-cart message should be shown instead of the list.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shipping as the summary shows it: "Grátis" or a formatted price.
    #[must_use]
    pub fn shipping_label(&self) -> String {
        if self.shipping.amount == Decimal::ZERO {
            FREE_SHIPPING_LABEL.to_string()
        } else {
            self.shipping.display()
        }
    }

    /// Unit price of a line, formatted.
    #[must_use]
    pub fn unit_price_label(&self, item: &LineItem) -> String {
        Price::new(item.price, self.subtotal.currency_code).display()
    }
}

/// Receives mutation notifications from a [`CartStore`](super::CartStore).
pub trait CartView {
    /// Called once after every mutation, after the new state is persisted.
    fn on_change(&mut self, event: &CartEvent, snapshot: &CartSnapshot<'_>);
}

/// A view that ignores every notification.
impl CartView for () {
    fn on_change(&mut self, _event: &CartEvent, _snapshot: &CartSnapshot<'_>) {}
}

impl<V: CartView + ?Sized> CartView for &mut V {
    fn on_change(&mut self, event: &CartEvent, snapshot: &CartSnapshot<'_>) {
        (**self).on_change(event, snapshot);
    }
}

impl<V: CartView + ?Sized> CartView for Box<V> {
    fn on_change(&mut self, event: &CartEvent, snapshot: &CartSnapshot<'_>) {
        (**self).on_change(event, snapshot);
    }
}
