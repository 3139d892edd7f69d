//! Type-safe price representation using decimal arithmetic.
//!
//! # Display contract
//!
//! Prices are shown the way the storefront renders them: currency symbol,
//! a single space, the amount rounded to two decimal places (midpoint away
//! from zero), no thousands grouping, and the currency's decimal separator.
//!
//! | Currency | Amount    | Display     |
//! |----------|-----------|-------------|
//! | BRL      | `1234.5`  | `R$ 1234,50` |
//! | USD      | `19.999`  | `$ 20.00`   |
//!
//! Parsing is the reverse of display and is lenient about surrounding
//! whitespace and a missing symbol, which is what rendered row text looks like.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a displayed price.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    /// Nothing left after removing the symbol and whitespace.
    #[error("price text is empty")]
    Empty,
    /// The remaining text is not a decimal number.
    #[error("invalid price text: {0:?}")]
    Invalid(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Number of decimal places shown for every currency.
    pub const DISPLAY_PLACES: u32 = 2;

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// The amount rounded to the displayed precision.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(Self::DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., "R$ 19,90").
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Parse rendered price text such as `"R$ 19,90"` or `" 19,9 "`.
    ///
    /// The currency symbol is removed wherever it appears, the rest is
    /// trimmed, and for comma-separated currencies the first comma becomes
    /// the decimal point.
    ///
    /// # Errors
    ///
    /// Returns `PriceParseError::Empty` if no digits remain and
    /// `PriceParseError::Invalid` if the remainder is not a decimal number.
    pub fn parse_display(text: &str, currency_code: CurrencyCode) -> Result<Self, PriceParseError> {
        let stripped = text.replace(currency_code.symbol(), "");
        let trimmed = stripped.trim();

        if trimmed.is_empty() {
            return Err(PriceParseError::Empty);
        }

        let normalized = match currency_code.decimal_separator() {
            '.' => trimmed.to_owned(),
            separator => trimmed.replacen(separator, ".", 1),
        };

        Decimal::from_str(&normalized)
            .map(|amount| Self::new(amount, currency_code))
            .map_err(|_| PriceParseError::Invalid(trimmed.to_owned()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = format!("{:.2}", self.rounded());
        let amount = match self.currency_code.decimal_separator() {
            '.' => amount,
            separator => amount.replacen('.', &separator.to_string(), 1),
        };
        write!(f, "{} {amount}", self.currency_code.symbol())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// The symbol printed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Decimal separator used in displayed amounts.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::BRL | Self::EUR => ',',
            Self::USD | Self::GBP => '.',
        }
    }
}
