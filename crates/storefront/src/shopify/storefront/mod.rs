//! Shopify Storefront API client implementation.
//!
//! Posts hand-written GraphQL documents with `reqwest` 0.13 and deserializes
//! the raw shapes in [`wire`] before flattening them through [`conversions`].
//! Every call fetches fresh data; nothing is cached between requests.

mod conversions;
pub mod queries;
mod wire;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::instrument;

use rootwear_core::Handle;

use crate::config::ShopifyConfig;
use crate::shopify::ShopifyError;
use crate::shopify::types::{CartLineInput, CheckoutSession, Product};

use conversions::{convert_checkout_session, convert_product, convert_products};

/// Largest page the Storefront API serves in one request.
const MAX_PAGE_SIZE: i64 = 250;

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Standard `{data, errors}` GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<super::GraphQLError>>,
}

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the Shopify Storefront API.
///
/// Provides access to the product catalog and cart creation for hosted
/// checkout. Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let endpoint = format!(
            "https://{}/api/{}/graphql.json",
            config.store_domain, config.api_version
        );

        Ok(Self {
            inner: Arc::new(StorefrontClientInner {
                client,
                endpoint,
                access_token: config.storefront_access_token.expose_secret().to_string(),
            }),
        })
    }

    /// Execute a GraphQL document.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, ShopifyError> {
        let request_body = json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            // Public access tokens use this header; server-side private
            // tokens would use Shopify-Storefront-Private-Token instead
            .header(
                "X-Shopify-Storefront-Access-Token",
                &self.inner.access_token,
            )
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            tracing::warn!(retry_after, "Shopify API rate limited");
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        // Check for non-success status codes
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify API returned non-success status"
            );
            return Err(ShopifyError::GraphQL(vec![super::GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                locations: vec![],
                path: vec![],
            }]));
        }

        // Parse the response
        let response: GraphQLResponse<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Shopify GraphQL response"
                );
                return Err(ShopifyError::Parse(e));
            }
        };

        // Check for GraphQL errors
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            tracing::debug!(
                errors = ?errors,
                "GraphQL errors in response"
            );
            return Err(ShopifyError::GraphQL(errors));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify GraphQL response has no data and no errors"
            );
            ShopifyError::GraphQL(vec![super::GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a page of products from the catalog.
    ///
    /// `first` is clamped to the API's 1..=250 page-size bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, first: i64) -> Result<Vec<Product>, ShopifyError> {
        let first = first.clamp(1, MAX_PAGE_SIZE);

        let data: wire::ProductsData = self
            .execute(queries::PRODUCTS_QUERY, Some(json!({ "first": first })))
            .await?;

        Ok(convert_products(data))
    }

    /// Get a product by its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_product_by_handle(&self, handle: &str) -> Result<Product, ShopifyError> {
        let data: wire::ProductData = self
            .execute(
                queries::PRODUCT_BY_HANDLE_QUERY,
                Some(json!({ "handle": handle })),
            )
            .await?;

        let product = data
            .product
            .ok_or_else(|| ShopifyError::NotFound(handle.to_string()))?;

        Ok(convert_product(product))
    }

    /// Fetch several products by handle in a single aliased document.
    ///
    /// Handles that do not resolve to a product are dropped; the result
    /// preserves the order of `handles`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, handles), fields(handle_count = handles.len()))]
    pub async fn get_products_by_handles(
        &self,
        handles: &[Handle],
    ) -> Result<Vec<Product>, ShopifyError> {
        if handles.is_empty() {
            return Ok(Vec::new());
        }

        let query = queries::featured_products_query(handles);

        let mut data: HashMap<String, Option<wire::Product>> =
            self.execute(&query, None).await?;

        let products = handles
            .iter()
            .filter_map(|handle| data.remove(&queries::handle_alias(handle)).flatten())
            .map(convert_product)
            .collect();

        Ok(products)
    }

    // =========================================================================
    // Cart Methods
    // =========================================================================

    /// Create a Shopify cart from the given lines and return the hosted
    /// checkout session for it.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::UserError`] with the first rule violation when
    /// Shopify rejects the input, or another error if the request fails.
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn create_cart(
        &self,
        lines: Vec<CartLineInput>,
    ) -> Result<CheckoutSession, ShopifyError> {
        let variables = json!({
            "input": {
                "lines": lines,
            }
        });

        let data: wire::CartCreateData = self
            .execute(queries::CART_CREATE_MUTATION, Some(variables))
            .await?;

        if let Some(result) = data.cart_create {
            // Surface the first user error verbatim
            if let Some(error) = result.user_errors.first() {
                return Err(ShopifyError::UserError(error.message.clone()));
            }

            if let Some(cart) = result.cart {
                return Ok(convert_checkout_session(cart));
            }
        }

        Err(ShopifyError::GraphQL(vec![super::GraphQLError {
            message: "Failed to create cart".to_string(),
            locations: vec![],
            path: vec![],
        }]))
    }
}
