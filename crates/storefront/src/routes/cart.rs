//! Cart route handlers.
//!
//! Every mutation answers with the full cart view so the caller never has to
//! issue a follow-up read. The checkout handler hands the line items to
//! Shopify and clears the local cart only after the upstream accepted them;
//! any failure leaves the cart as it was so the user can retry.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::{CartLineItem, CartStore};
use crate::error::{AppError, Result};
use crate::shopify::types::CheckoutSession;
use crate::state::AppState;

/// The cart as returned to clients: items in insertion order plus totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    /// Sum of unit price times quantity, serialized as a decimal string.
    pub total: Decimal,
    pub item_count: i64,
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            items: cart.items(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}

/// Body of a quantity update.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantity {
    pub quantity: i64,
}

/// Show the current cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from(state.cart()))
}

/// Add a line item. An item with an id already in the cart increments that
/// line's quantity instead of duplicating it.
#[instrument(skip(state, item), fields(item_id = %item.id))]
pub async fn add(State(state): State<AppState>, Json(item): Json<CartLineItem>) -> Json<CartView> {
    state.cart().add(item);
    Json(CartView::from(state.cart()))
}

/// Set a line item's quantity. Zero or below removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateQuantity>,
) -> Json<CartView> {
    state.cart().set_quantity(&id, body.quantity);
    Json(CartView::from(state.cart()))
}

/// Remove a line item. No-op when the id is absent.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Json<CartView> {
    state.cart().remove(&id);
    Json(CartView::from(state.cart()))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    state.cart().clear();
    Json(CartView::from(state.cart()))
}

/// Hand the cart to Shopify and return the hosted checkout session.
///
/// The local cart is cleared only on success; Shopify owns the line items
/// from that point. On any failure the cart stays untouched.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Json<CheckoutSession>> {
    let items = state.cart().items();
    if items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_string()));
    }

    let lines = items.iter().map(CartLineItem::checkout_line).collect();
    let session = state.storefront()?.create_cart(lines).await?;

    state.cart().clear();
    tracing::info!(cart_id = %session.id, "Checkout handoff complete, local cart cleared");

    Ok(Json(session))
}
