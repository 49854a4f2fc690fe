//! CLI command implementations.

pub mod checkout;
pub mod products;

use rootwear_storefront::config::StorefrontConfig;
use rootwear_storefront::shopify::StorefrontClient;
use thiserror::Error;

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration failed to load or validate.
    #[error("Configuration error: {0}")]
    Config(#[from] rootwear_storefront::config::ConfigError),

    /// The Shopify environment variables are not set.
    #[error(
        "Shopify is not configured. Set SHOPIFY_DOMAIN and SHOPIFY_STOREFRONT_ACCESS_TOKEN (a .env file works)."
    )]
    ShopifyNotConfigured,

    /// Upstream API call failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] rootwear_storefront::shopify::ShopifyError),

    /// Output serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load configuration and build a live Storefront API client.
pub fn storefront_client() -> Result<(StorefrontConfig, StorefrontClient), CliError> {
    let config = StorefrontConfig::from_env()?;
    let shopify = config
        .shopify
        .as_ref()
        .ok_or(CliError::ShopifyNotConfigured)?;
    let client = StorefrontClient::new(shopify)?;

    Ok((config, client))
}
