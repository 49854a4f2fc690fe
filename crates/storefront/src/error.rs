//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`; every failure becomes a JSON `{"error": message}`
//! body, never a process exit.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::stripe::StripeError;
use crate::shopify::ShopifyError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The Shopify environment variables are not set.
    #[error("Shopify configuration missing")]
    ShopifyNotConfigured,

    /// The Stripe environment variable is not set.
    #[error("Stripe configuration missing")]
    StripeNotConfigured,

    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// Stripe API operation failed.
    #[error("Stripe error: {0}")]
    Stripe(#[from] StripeError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ShopifyNotConfigured | Self::StripeNotConfigured => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Shopify(err) => match err {
                ShopifyError::UserError(_) => StatusCode::BAD_REQUEST,
                ShopifyError::NotFound(_) => StatusCode::NOT_FOUND,
                ShopifyError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                ShopifyError::Http(_) | ShopifyError::GraphQL(_) | ShopifyError::Parse(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::Stripe(err) => match err {
                StripeError::InvalidLineItem(_) => StatusCode::BAD_REQUEST,
                StripeError::Http(_) | StripeError::Api { .. } | StripeError::Parse(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The message sent to the client.
    ///
    /// Mutation user errors and GraphQL errors pass through verbatim;
    /// transport and parse failures collapse to a generic message so
    /// internals never leak.
    fn client_message(&self) -> String {
        match self {
            Self::ShopifyNotConfigured | Self::StripeNotConfigured => self.to_string(),
            Self::Shopify(err) => match err {
                ShopifyError::UserError(message) => message.clone(),
                ShopifyError::GraphQL(_) => err
                    .first_message()
                    .unwrap_or("External service error")
                    .to_string(),
                ShopifyError::NotFound(_) => "Product not found".to_string(),
                ShopifyError::RateLimited(_) => err.to_string(),
                ShopifyError::Http(_) | ShopifyError::Parse(_) => {
                    "External service error".to_string()
                }
            },
            Self::Stripe(err) => match err {
                StripeError::InvalidLineItem(message) => message.clone(),
                StripeError::Http(_) | StripeError::Api { .. } | StripeError::Parse(_) => {
                    "Payment service error".to_string()
                }
            },
            Self::BadRequest(message) => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
