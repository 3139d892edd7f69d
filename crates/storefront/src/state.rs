//! Page state assembled at load time.

use chrono::NaiveDateTime;

use crate::cart::{CartStore, CartView, PersistenceBackend};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::page::{OfferCountdown, SoldProgress};
use crate::review::{CartReview, ReviewRow};
use crate::telemetry;

/// Parse the page's embedded JSON configuration and install logging for it.
///
/// Call once per page, before [`PageState::new`].
///
/// # Errors
///
/// Returns `Error::Config` if the document is invalid, or `Error::Telemetry`
/// if the log filter does not parse or logging is already installed.
pub fn bootstrap(config_json: &str) -> Result<StorefrontConfig> {
    let config = StorefrontConfig::from_json(config_json)?;
    telemetry::init(&config.logging)?;
    tracing::debug!(filter = %config.logging.filter, "Storefront logging installed");
    Ok(config)
}

/// Everything the storefront page owns once loaded.
///
/// The renderer keeps one of these for the page's lifetime and routes DOM
/// events and timer ticks to the matching field.
#[derive(Debug)]
pub struct PageState<B, V = ()> {
    config: StorefrontConfig,
    pub cart: CartStore<B, V>,
    pub countdown: OfferCountdown,
    pub progress: SoldProgress,
}

impl<B: PersistenceBackend, V: CartView> PageState<B, V> {
    /// Validate `config`, restore the cart from `backend` and start the
    /// banner widgets relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(config: StorefrontConfig, backend: B, view: V, now: NaiveDateTime) -> Result<Self> {
        config.validate()?;

        let cart = CartStore::load(backend, view, config.cart.clone());
        let countdown = OfferCountdown::starting_at(now, config.banner.countdown_days);
        let progress = SoldProgress::new(config.banner.progress_target);

        tracing::debug!(
            items = cart.items().len(),
            deadline = %countdown.deadline(),
            "Storefront page state ready"
        );

        Ok(Self {
            config,
            cart,
            countdown,
            progress,
        })
    }

    /// Build the cart-review screen from its rendered rows.
    #[must_use]
    pub fn review(&self, rows: Vec<ReviewRow>) -> CartReview {
        CartReview::new(rows, &self.config.review)
    }

    /// Get the page configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}
