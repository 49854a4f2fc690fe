//! Core types for Rootwear.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod handle;
pub mod price;

pub use handle::{Handle, HandleError};
pub use price::{CurrencyCode, Price, PriceError};
