//! Storefront page configuration.
//!
//! Every value has a default matching the live promotional page, so
//! `StorefrontConfig::default()` is a complete configuration. Pages that need
//! different values embed a JSON document and load it with
//! [`StorefrontConfig::from_json`]; missing keys fall back to the defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "cart": {
//!     "storage_key": "cartItems",
//!     "free_shipping_threshold": 200,
//!     "flat_shipping_fee": 15
//!   },
//!   "review": { "shipping": 20 },
//!   "banner": { "countdown_days": 3, "progress_target": 75 },
//!   "logging": { "filter": "vitrine_storefront=debug", "json": false }
//! }
//! ```

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_core::CurrencyCode;

use crate::models::keys;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration value {0}: {1}")]
    InvalidValue(String, String),
}

/// Storefront page configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Cart store settings
    pub cart: CartConfig,
    /// Static cart-review screen settings
    pub review: ReviewConfig,
    /// Promotional banner widget settings
    pub banner: BannerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Cart store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key the serialized line items are stored under
    pub storage_key: String,
    /// Currency of every price in the cart
    pub currency: CurrencyCode,
    /// Shipping is free when the subtotal exceeds this amount
    pub free_shipping_threshold: Decimal,
    /// Shipping fee charged at or below the threshold
    pub flat_shipping_fee: Decimal,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: keys::CART_ITEMS.to_string(),
            currency: CurrencyCode::BRL,
            free_shipping_threshold: Decimal::from(200),
            flat_shipping_fee: Decimal::from(15),
        }
    }
}

/// Static cart-review screen settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Fixed shipping added to the review total
    pub shipping: Decimal,
    /// Currency of the rendered rows
    pub currency: CurrencyCode,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            shipping: Decimal::from(20),
            currency: CurrencyCode::BRL,
        }
    }
}

/// Promotional banner widget settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// The offer ends at 23:59:59.999 this many days from page load
    pub countdown_days: u32,
    /// Final width (percent) of the "sold units" bar
    pub progress_target: u8,
    /// Milliseconds between progress bar steps
    pub progress_tick_ms: u64,
    /// Milliseconds between carousel auto-advances
    pub carousel_interval_ms: u64,
    /// Milliseconds before the subtitle starts typing
    pub typewriter_delay_ms: u64,
    /// Milliseconds between typed characters
    pub typewriter_step_ms: u64,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            countdown_days: 3,
            progress_target: 75,
            progress_tick_ms: 30,
            carousel_interval_ms: 5000,
            typewriter_delay_ms: 1000,
            typewriter_step_ms: 50,
        }
    }
}

impl BannerConfig {
    /// Interval between progress bar steps.
    #[must_use]
    pub const fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }

    /// Interval between carousel auto-advances.
    #[must_use]
    pub const fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    /// Delay before the typewriter starts.
    #[must_use]
    pub const fn typewriter_delay(&self) -> Duration {
        Duration::from_millis(self.typewriter_delay_ms)
    }

    /// Interval between typed characters.
    #[must_use]
    pub const fn typewriter_step(&self) -> Duration {
        Duration::from_millis(self.typewriter_step_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `vitrine_storefront=debug`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is not valid JSON for
    /// this shape, or `ConfigError::InvalidValue` if a value fails
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but make no sense.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cart.storage_key.trim().is_empty() {
            return Err(invalid("cart.storage_key", "must not be empty"));
        }
        if self.cart.free_shipping_threshold.is_sign_negative() {
            return Err(invalid("cart.free_shipping_threshold", "must not be negative"));
        }
        if self.cart.flat_shipping_fee.is_sign_negative() {
            return Err(invalid("cart.flat_shipping_fee", "must not be negative"));
        }
        if self.review.shipping.is_sign_negative() {
            return Err(invalid("review.shipping", "must not be negative"));
        }
        if self.banner.progress_target > 100 {
            return Err(invalid("banner.progress_target", "must be at most 100"));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(invalid("logging.filter", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue(field.to_string(), reason.to_string())
}
