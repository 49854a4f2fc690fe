//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::{CartStorage, CartStore, JsonFileStorage};
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::services::stripe::{StripeClient, StripeError};
use crate::shopify::{ShopifyError, StorefrontClient};

/// Error constructing the shared application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Shopify client: {0}")]
    Shopify(#[from] ShopifyError),
    #[error("Stripe client: {0}")]
    Stripe(#[from] StripeError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// cart store, the upstream API clients, and configuration. The clients are
/// optional; handlers that need an unconfigured one get the fixed
/// configuration-missing error instead.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storefront: Option<StorefrontClient>,
    stripe: Option<StripeClient>,
    cart: CartStore,
}

impl AppState {
    /// Create the application state, persisting the cart at the configured
    /// file path.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured API client fails to construct.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let storage = Arc::new(JsonFileStorage::new(config.cart_storage_path.clone()));
        Self::with_storage(config, storage)
    }

    /// Create the application state with an explicit cart storage backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured API client fails to construct.
    pub fn with_storage(
        config: StorefrontConfig,
        storage: Arc<dyn CartStorage>,
    ) -> Result<Self, StateError> {
        let storefront = config
            .shopify
            .as_ref()
            .map(StorefrontClient::new)
            .transpose()?;
        let stripe = config.stripe.as_ref().map(StripeClient::new).transpose()?;
        let cart = CartStore::new(storage);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                storefront,
                stripe,
                cart,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get the Shopify Storefront API client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShopifyNotConfigured`] when the Shopify
    /// environment variables are not set.
    pub fn storefront(&self) -> Result<&StorefrontClient, AppError> {
        self.inner
            .storefront
            .as_ref()
            .ok_or(AppError::ShopifyNotConfigured)
    }

    /// Get the Stripe client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StripeNotConfigured`] when the Stripe environment
    /// variable is not set.
    pub fn stripe(&self) -> Result<&StripeClient, AppError> {
        self.inner
            .stripe
            .as_ref()
            .ok_or(AppError::StripeNotConfigured)
    }

    /// Whether the Shopify client is configured, for the readiness probe.
    #[must_use]
    pub fn shopify_configured(&self) -> bool {
        self.inner.storefront.is_some()
    }
}
