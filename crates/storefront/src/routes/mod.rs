//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! # Products (Shopify-backed)
//! GET  /api/products                - Product listing (?first=N, default 50)
//! GET  /api/products/{handle}       - Single product by handle (404 on miss)
//! GET  /api/featured-products       - Configured featured handles, one query
//!
//! # Catalog (static)
//! GET  /api/catalog                 - Curated merchandise list, no upstream call
//!
//! # Cart
//! GET    /api/cart                  - Current items plus totals
//! POST   /api/cart/items            - Add a line item (merges on id)
//! PUT    /api/cart/items/{id}       - Set a line item's quantity
//! DELETE /api/cart/items/{id}       - Remove a line item
//! DELETE /api/cart                  - Clear the cart
//! POST   /api/cart/checkout         - Shopify checkout handoff
//!
//! # Checkout (Stripe)
//! POST /api/checkout                - Create a card checkout session
//! ```
//!
//! Every response body is JSON; failures render as `{"error": message}` via
//! [`crate::error::AppError`]. Liveness and readiness live in `main.rs` next
//! to server startup.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{handle}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route("/items", post(cart::add))
        .route("/items/{id}", delete(cart::remove).put(cart::update))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product routes
        .nest("/api/products", product_routes())
        .route("/api/featured-products", get(products::featured))
        // Static catalog
        .route("/api/catalog", get(catalog::index))
        // Cart routes
        .nest("/api/cart", cart_routes())
        // Stripe checkout session
        .route("/api/checkout", post(checkout::create_session))
}
