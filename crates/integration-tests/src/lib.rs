//! Integration tests for Rootwear.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront server
//! cargo run -p rootwear-storefront
//!
//! # Run integration tests
//! cargo test -p rootwear-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_api` - API tests that need only a running server
//!   (catalog, cart flow, error mapping)
//! - Shopify-backed tests additionally need `SHOPIFY_DOMAIN` and
//!   `SHOPIFY_STOREFRONT_ACCESS_TOKEN` set for the server under test
//!
//! The base URL defaults to `http://localhost:3000` and can be overridden
//! with `STOREFRONT_BASE_URL`.
