//! External service clients for the storefront.
//!
//! # Services
//!
//! - `stripe` - Hosted Checkout Sessions for the card payment path

pub mod stripe;
