//! Derived cart figures.
//!
//! Pure functions over a slice of line items so the store, its snapshots and
//! tests all compute totals the same way. Money arithmetic is checked: a cart
//! whose figures do not fit in a `Decimal` has no totals.

use rust_decimal::Decimal;

use crate::config::CartConfig;
use crate::models::LineItem;

/// Every figure the cart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub item_count: u64,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Figures for `items`, or `None` if any of them overflows.
    #[must_use]
    pub fn compute(items: &[LineItem], config: &CartConfig) -> Option<Self> {
        let subtotal = subtotal(items)?;
        let shipping = shipping(subtotal, config);
        Some(Self {
            item_count: item_count(items),
            subtotal,
            shipping,
            total: subtotal.checked_add(shipping)?,
        })
    }

    /// Figures of an empty cart.
    #[must_use]
    pub fn empty(config: &CartConfig) -> Self {
        let shipping = shipping(Decimal::ZERO, config);
        Self {
            item_count: 0,
            subtotal: Decimal::ZERO,
            shipping,
            total: shipping,
        }
    }
}

/// Sum of `price * quantity` over all items, or `None` on overflow.
#[must_use]
pub fn subtotal(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.line_total()?))
}

/// Free when the subtotal strictly exceeds the threshold, flat fee otherwise.
#[must_use]
pub fn shipping(subtotal: Decimal, config: &CartConfig) -> Decimal {
    if subtotal > config.free_shipping_threshold {
        Decimal::ZERO
    } else {
        config.flat_shipping_fee
    }
}

/// Number of units in the cart, shown on the header badge.
#[must_use]
pub fn item_count(items: &[LineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn item(id: i64, price: Decimal, quantity: u32) -> LineItem {
        let mut item = LineItem::from_product(Product::new(id, "item", "item.png", price));
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_subtotal_empty() {
        assert_eq!(subtotal(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let items = [
            item(1, Decimal::new(1990, 2), 2),
            item(2, Decimal::new(501, 2), 1),
        ];
        assert_eq!(subtotal(&items), Some(Decimal::new(4481, 2)));
    }

    #[test]
    fn test_subtotal_overflow_is_none() {
        let items = [item(1, Decimal::MAX, 1), item(2, Decimal::MAX, 1)];
        assert_eq!(subtotal(&items), None);
        assert_eq!(Totals::compute(&items, &CartConfig::default()), None);
    }

    #[test]
    fn test_total_overflow_is_none() {
        let config = CartConfig {
            free_shipping_threshold: Decimal::MAX,
            ..CartConfig::default()
        };
        let items = [item(1, Decimal::MAX, 1)];
        assert_eq!(Totals::compute(&items, &config), None);
    }

    #[test]
    fn test_compute_matches_empty() {
        let config = CartConfig::default();
        assert_eq!(Totals::compute(&[], &config), Some(Totals::empty(&config)));
        assert_eq!(Totals::empty(&config).total, Decimal::from(15));
    }

    #[test]
    fn test_shipping_threshold_is_exclusive() {
        let config = CartConfig::default();
        assert_eq!(shipping(Decimal::from(200), &config), Decimal::from(15));
        assert_eq!(shipping(Decimal::new(20001, 2), &config), Decimal::ZERO);
        assert_eq!(shipping(Decimal::ZERO, &config), Decimal::from(15));
    }

    #[test]
    fn test_item_count() {
        let items = [item(1, Decimal::ONE, 3), item(2, Decimal::ONE, 4)];
        assert_eq!(item_count(&items), 7);
    }
}
