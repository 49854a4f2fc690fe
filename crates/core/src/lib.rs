//! Rootwear Core - Shared types library.
//!
//! This crate provides common types used across all Rootwear components:
//! - `storefront` - Headless storefront service (products, cart, checkout)
//! - `cli` - Command-line tools for poking the live commerce APIs
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money arithmetic and validated product handles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
