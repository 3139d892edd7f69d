//! Vitrine storefront page logic.
//!
//! The shopping cart ([`cart::CartStore`]), the static cart-review screen
//! ([`review::CartReview`]) and the promotional page widgets, all free of any
//! DOM access. A renderer feeds events and timer ticks in and draws what the
//! state reports back.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod review;
pub mod state;
pub mod telemetry;

pub use error::{Error, Result};
