//! Vitrine Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront page logic:
//! - `vitrine-storefront` - Cart store, review screen and page widgets
//! - `vitrine-integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no rendering. This keeps it lightweight and allows it to be used
//! anywhere, including `wasm32` builds.
//!
//! # Modules
//!
//! - [`types`] - Item ids, locale-aware prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
