//! Product identifiers for cart line items.
//!
//! Product records arrive from the page with either a numeric or a textual
//! id, and the persisted cart keeps whichever form it was given. The two
//! forms never compare equal: `1` and `"1"` are different products.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product identifier, stable across sessions.
///
/// Serializes as a bare JSON number or string.
///
/// # Example
///
/// ```rust
/// # use vitrine_core::ItemId;
/// let numeric = ItemId::from(1);
/// let textual = ItemId::from("1");
///
/// assert_ne!(numeric, textual);
/// assert_eq!(numeric.to_string(), textual.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Integer id, as emitted by the product cards.
    Number(i64),
    /// Free-form string id (SKU, handle).
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}
