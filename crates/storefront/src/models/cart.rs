//! Cart line items and the product records that create them.
//!
//! Line items are stored as a JSON array of objects:
//!
//! ```json
//! [{"id": 1, "name": "Camiseta", "image": "img/camiseta.png", "price": 49.9, "quantity": 2}]
//! ```
//!
//! Prices are JSON numbers. Fields this crate does not know about are kept in
//! [`LineItem::extra`] and written back unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use vitrine_core::ItemId;

/// A product offered by an "add to cart" action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    pub image: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    /// Create a product record.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        image: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            price,
        }
    }
}

/// One product entry in the cart with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    pub image: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Always at least 1 inside a cart; zero only for freshly decoded
    /// records that normalization is about to drop.
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    /// Passthrough fields from the persisted record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Start a line item for `product` with quantity 1.
    #[must_use]
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image: product.image,
            price: product.price,
            quantity: 1,
            extra: Map::new(),
        }
    }

    /// `price * quantity`, or `None` when it does not fit in a `Decimal`.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Reads any integer, mapping zero and negative quantities to 0 and clamping
/// oversized ones to `u32::MAX`.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(u32::try_from(raw.max(0)).unwrap_or(u32::MAX))
}

/// Restore the cart invariants on decoded records.
///
/// Records with a zero quantity are dropped. Records repeating an earlier id
/// are merged into the first one by summing quantities; the first record's
/// position and fields win.
#[must_use]
pub fn normalize(records: Vec<LineItem>) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = Vec::with_capacity(records.len());

    for record in records {
        if record.quantity == 0 {
            continue;
        }
        match items.iter_mut().find(|item| item.id == record.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(record.quantity);
            }
            None => items.push(record),
        }
    }

    items
}
