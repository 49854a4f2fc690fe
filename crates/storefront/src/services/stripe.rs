//! Stripe Checkout client for the card payment path.
//!
//! Creates hosted Checkout Sessions over Stripe's form-encoded REST API.
//! The caller redirects the buyer to the returned URL; Stripe owns payment
//! collection from there.

use reqwest::header::{HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rootwear_core::{CurrencyCode, Price};

use crate::config::StripeConfig;

/// Stripe REST API base URL.
const BASE_URL: &str = "https://api.stripe.com/v1";

/// Errors that can occur when interacting with the Stripe API.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or build a request.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A line item cannot be expressed in integer cents.
    #[error("Invalid line item: {0}")]
    InvalidLineItem(String),
}

/// One (name, unit price, quantity) entry for a payment session.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLineItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

/// A created Checkout Session: its id and the hosted payment page URL.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}

/// Stripe API client for hosted checkout sessions.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
}

impl StripeClient {
    /// Create a new Stripe API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &StripeConfig) -> Result<Self, StripeError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.secret_key.expose_secret());
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&auth_value)
                .map_err(|e| StripeError::Parse(format!("Invalid secret key format: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Create a card-payment Checkout Session and return its redirect URL.
    ///
    /// Success and cancel pages hang off `origin`: `{origin}/success` and
    /// `{origin}/cancel`.
    ///
    /// # Errors
    ///
    /// Returns error if a line item cannot be priced in cents, or if the
    /// API request fails.
    pub async fn create_checkout_session(
        &self,
        items: &[PaymentLineItem],
        origin: &str,
    ) -> Result<PaymentSession, StripeError> {
        let url = format!("{BASE_URL}/checkout/sessions");
        let params = session_params(items, origin)?;

        let response = self.client.post(&url).form(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| StripeError::Parse(e.to_string()))?;

        let redirect_url = session.url.ok_or_else(|| {
            StripeError::Parse("Checkout session has no redirect URL".to_string())
        })?;

        Ok(PaymentSession {
            id: session.id,
            url: redirect_url,
        })
    }
}

/// Flatten session fields into Stripe's bracketed form encoding.
fn session_params(
    items: &[PaymentLineItem],
    origin: &str,
) -> Result<Vec<(String, String)>, StripeError> {
    let mut params = vec![
        ("mode".to_string(), "payment".to_string()),
        ("payment_method_types[0]".to_string(), "card".to_string()),
        ("success_url".to_string(), format!("{origin}/success")),
        ("cancel_url".to_string(), format!("{origin}/cancel")),
    ];

    for (index, item) in items.iter().enumerate() {
        let unit_amount = Price::new(item.price, CurrencyCode::USD)
            .to_cents()
            .ok_or_else(|| {
                StripeError::InvalidLineItem(format!(
                    "Unit price out of range for \"{}\"",
                    item.name
                ))
            })?;

        params.push((
            format!("line_items[{index}][price_data][currency]"),
            "usd".to_string(),
        ));
        params.push((
            format!("line_items[{index}][price_data][product_data][name]"),
            item.name.clone(),
        ));
        params.push((
            format!("line_items[{index}][price_data][unit_amount]"),
            unit_amount.to_string(),
        ));
        params.push((
            format!("line_items[{index}][quantity]"),
            item.quantity.to_string(),
        ));
    }

    Ok(params)
}
