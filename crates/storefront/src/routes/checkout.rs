//! Stripe checkout route handler.
//!
//! The card payment path: the client posts display-cart items (name, unit
//! price, quantity) and gets back the hosted payment page URL. Success and
//! cancel pages hang off the caller's `Origin`, falling back to the
//! configured public base URL for non-browser callers.

use axum::{Json, extract::State, http::HeaderMap};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::stripe::{PaymentLineItem, PaymentSession};
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<PaymentLineItem>,
}

/// Create a Stripe Checkout Session and return `{id, url}`.
#[instrument(skip(state, headers, body), fields(item_count = body.items.len()))]
pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<PaymentSession>> {
    if body.items.is_empty() {
        return Err(AppError::BadRequest("No items to check out".to_string()));
    }

    let origin = headers
        .get("origin")
        .and_then(|value| value.to_str().ok())
        .unwrap_or(state.config().public_base_url.as_str());

    let session = state
        .stripe()?
        .create_checkout_session(&body.items, origin)
        .await?;

    Ok(Json(session))
}
