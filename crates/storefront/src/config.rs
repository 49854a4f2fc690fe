//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Server
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)
//! - `PUBLIC_BASE_URL` - Public URL used for checkout redirect targets
//!   (default: <http://localhost:3000>)
//! - `CART_STORAGE_PATH` - Cart persistence file (default: data/rootwear-cart.json)
//! - `FEATURED_PRODUCT_HANDLES` - Comma-separated product handles for the
//!   featured strip (default: hello-world-embroidered-tech-t-shirt)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//!
//! ## Shopify Storefront API
//! Product and checkout endpoints return 500 until both are set.
//! - `SHOPIFY_DOMAIN` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_STOREFRONT_ACCESS_TOKEN` - Storefront API access token
//! - `SHOPIFY_API_VERSION` - API version (default: 2024-01)
//!
//! ## Stripe
//! The card checkout endpoint returns 500 until set.
//! - `STRIPE_SECRET_KEY` - Stripe secret API key

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use rootwear_core::Handle;
use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_API_VERSION: &str = "2024-01";
const DEFAULT_FEATURED_HANDLES: &str = "hello-world-embroidered-tech-t-shirt";

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL, used when a request carries no Origin header
    pub public_base_url: String,
    /// Path of the cart persistence file
    pub cart_storage_path: PathBuf,
    /// Handles served by the featured-products endpoint
    pub featured_handles: Vec<Handle>,
    /// Shopify Storefront API configuration, absent until the env vars are set
    pub shopify: Option<ShopifyConfig>,
    /// Stripe configuration, absent until the env var is set
    pub stripe: Option<StripeConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Shopify Storefront API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store_domain: String,
    /// Shopify API version (e.g., 2024-01)
    pub api_version: String,
    /// Storefront API access token
    pub storefront_access_token: SecretString,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store_domain", &self.store_domain)
            .field("api_version", &self.api_version)
            .field("storefront_access_token", &"[REDACTED]")
            .finish()
    }
}

/// Stripe API configuration.
///
/// Implements `Debug` manually to redact the secret key.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key
    pub secret_key: SecretString,
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// The Shopify and Stripe blocks are optional: when their variables are
    /// unset the server still starts, and the endpoints that need them answer
    /// with a fixed 500 instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse or a configured
    /// secret fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;
        let public_base_url = get_env_or_default("PUBLIC_BASE_URL", "http://localhost:3000");
        let cart_storage_path =
            PathBuf::from(get_env_or_default("CART_STORAGE_PATH", "data/rootwear-cart.json"));
        let featured_handles = parse_featured_handles(&get_env_or_default(
            "FEATURED_PRODUCT_HANDLES",
            DEFAULT_FEATURED_HANDLES,
        ))?;

        let shopify = ShopifyConfig::from_env()?;
        let stripe = StripeConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            public_base_url,
            cart_storage_path,
            featured_handles,
            shopify,
            stripe,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopifyConfig {
    /// Returns `None` unless both the store domain and the access token are
    /// set. A half-configured pair counts as missing so that the affected
    /// endpoints answer with the fixed 500 instead of failing startup.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let (Some(store_domain), Some(access_token)) = (
            get_optional_env("SHOPIFY_DOMAIN"),
            get_optional_env("SHOPIFY_STOREFRONT_ACCESS_TOKEN"),
        ) else {
            return Ok(None);
        };
        validate_secret_strength(&access_token, "SHOPIFY_STOREFRONT_ACCESS_TOKEN")?;
        Ok(Some(Self {
            store_domain,
            api_version: get_env_or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION),
            storefront_access_token: SecretString::from(access_token),
        }))
    }
}

impl StripeConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(secret_key) = get_optional_env("STRIPE_SECRET_KEY") else {
            return Ok(None);
        };
        validate_secret_strength(&secret_key, "STRIPE_SECRET_KEY")?;
        Ok(Some(Self {
            secret_key: SecretString::from(secret_key),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a comma-separated handle list, skipping empty segments.
fn parse_featured_handles(raw: &str) -> Result<Vec<Handle>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            Handle::parse(part).map_err(|e| {
                ConfigError::InvalidEnvVar("FEATURED_PRODUCT_HANDLES".to_string(), e.to_string())
            })
        })
        .collect()
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real API tokens have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the token issued by the dashboard."
            ),
        ));
    }

    Ok(())
}
