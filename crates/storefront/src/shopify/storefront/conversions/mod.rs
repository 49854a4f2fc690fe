//! Type conversion functions for Shopify Storefront API responses.

pub mod checkout;
pub mod products;

pub use checkout::convert_checkout_session;
pub use products::{convert_product, convert_products};
