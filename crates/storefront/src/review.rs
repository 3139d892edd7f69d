//! Cart review screen recalculation.
//!
//! The review page renders its rows server-side; nothing else models them.
//! [`CartReview`] holds exactly what the page shows (price text, the raw
//! quantity input, and the rendered subtotals) and recomputes every figure
//! from that text whenever a row is removed or a quantity changes.

use rust_decimal::Decimal;
use vitrine_core::{CurrencyCode, Price};

use crate::config::ReviewConfig;

/// One rendered row of the review table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    /// Displayed unit price, e.g. `"R$ 49,90"`.
    pub price_text: String,
    /// Current value of the quantity input, as typed.
    pub quantity_input: String,
    /// Displayed row subtotal, written by recalculation.
    pub subtotal_text: String,
}

impl ReviewRow {
    /// A row as first rendered, before any recalculation.
    #[must_use]
    pub fn new(price_text: impl Into<String>, quantity_input: impl Into<String>) -> Self {
        Self {
            price_text: price_text.into(),
            quantity_input: quantity_input.into(),
            subtotal_text: String::new(),
        }
    }
}

/// The review screen: rendered rows plus the summary fields.
#[derive(Debug, Clone)]
pub struct CartReview {
    rows: Vec<ReviewRow>,
    shipping: Decimal,
    currency: CurrencyCode,
    subtotal_text: String,
    total_text: String,
}

impl CartReview {
    /// Build the screen from its rendered rows and compute every figure,
    /// as the page does once loaded.
    #[must_use]
    pub fn new(rows: Vec<ReviewRow>, config: &ReviewConfig) -> Self {
        let mut review = Self {
            rows,
            shipping: config.shipping,
            currency: config.currency,
            subtotal_text: String::new(),
            total_text: String::new(),
        };
        review.recalculate();
        review
    }

    /// Recompute each row subtotal, the summary subtotal and the total.
    ///
    /// A row whose figures do not fit in a `Decimal` is treated like an
    /// unreadable price: it shows and contributes zero.
    pub fn recalculate(&mut self) {
        let currency = self.currency;
        let mut subtotal = Decimal::ZERO;

        for row in &mut self.rows {
            let price = match Price::parse_display(&row.price_text, currency) {
                Ok(price) => price.amount,
                Err(e) => {
                    tracing::warn!(
                        text = %row.price_text,
                        error = %e,
                        "Unreadable review price, counting as zero"
                    );
                    Decimal::ZERO
                }
            };
            let quantity = parse_quantity_input(&row.quantity_input).map_or(1, |q| q.max(1));
            let figures = price
                .checked_mul(Decimal::from(quantity))
                .and_then(|row_subtotal| Some((row_subtotal, subtotal.checked_add(row_subtotal)?)));

            let row_subtotal = match figures {
                Some((row_subtotal, running)) => {
                    subtotal = running;
                    row_subtotal
                }
                None => {
                    tracing::warn!(
                        price = %row.price_text,
                        quantity = %row.quantity_input,
                        "Review row out of range, counting as zero"
                    );
                    Decimal::ZERO
                }
            };
            row.subtotal_text = Price::new(row_subtotal, currency).display();
        }

        let total = subtotal.checked_add(self.shipping).unwrap_or_else(|| {
            tracing::warn!(
                shipping = %self.shipping,
                "Review total out of range, omitting shipping"
            );
            subtotal
        });
        self.subtotal_text = Price::new(subtotal, currency).display();
        self.total_text = Price::new(total, currency).display();
    }

    /// Remove the row at `index` and recompute. Out of range does nothing.
    pub fn remove_row(&mut self, index: usize) -> Option<ReviewRow> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);
        self.recalculate();
        Some(removed)
    }

    /// Apply a change event from the quantity input of row `index`.
    ///
    /// Values below 1, and values that are not numbers, are replaced by `"1"`.
    /// Anything else is kept as typed. Out of range does nothing.
    pub fn change_quantity(&mut self, index: usize, raw: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.quantity_input = match parse_quantity_input(raw) {
            Some(quantity) if quantity >= 1 => raw.to_string(),
            _ => "1".to_string(),
        };
        self.recalculate();
    }

    /// Rendered rows.
    #[must_use]
    pub fn rows(&self) -> &[ReviewRow] {
        &self.rows
    }

    /// Summary subtotal as displayed.
    #[must_use]
    pub fn subtotal_text(&self) -> &str {
        &self.subtotal_text
    }

    /// Summary total as displayed.
    #[must_use]
    pub fn total_text(&self) -> &str {
        &self.total_text
    }

    /// Fixed shipping added to the total.
    #[must_use]
    pub const fn shipping(&self) -> Decimal {
        self.shipping
    }
}

/// Read a quantity input the way the page reads it.
///
/// Leading whitespace is skipped, then an optional sign and the leading run
/// of ASCII digits are read; anything after is ignored. Returns `None` when
/// there are no digits.
///
/// ```
/// use vitrine_storefront::review::parse_quantity_input;
///
/// assert_eq!(parse_quantity_input(" 3"), Some(3));
/// assert_eq!(parse_quantity_input("2.7"), Some(2));
/// assert_eq!(parse_quantity_input("-4x"), Some(-4));
/// assert_eq!(parse_quantity_input("abc"), None);
/// ```
#[must_use]
pub fn parse_quantity_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.chars().next() {
        Some('-') => (true, trimmed.get(1..)?),
        Some('+') => (false, trimmed.get(1..)?),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
