//! Product route handlers.
//!
//! All three handlers are thin wrappers over the Storefront client: the
//! normalization work (edge flattening, availability defaulting, the image
//! `src` alias) already happened in the conversion layer, so these return
//! domain types directly.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog;
use crate::error::Result;
use crate::shopify::types::Product;
use crate::state::AppState;

/// Image shown for featured products with no photography yet.
const PLACEHOLDER_IMAGE: &str = "/placeholder-product.svg";

/// Listing page size when `?first` is absent.
const DEFAULT_PAGE_SIZE: i64 = 50;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub first: Option<i64>,
}

/// Listing and featured response envelope.
#[derive(Debug, Serialize)]
pub struct ProductsResponse<T> {
    pub products: Vec<T>,
}

/// A featured product: the normalized product plus the flat fields the
/// product-card consumers read directly.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProduct {
    #[serde(flatten)]
    pub product: Product,
    /// Card image URL; a placeholder when the product has no photo.
    pub image: String,
    /// Card image alt text; the product title when the photo has none.
    pub image_alt: String,
    /// Minimum variant price as a plain number, for card display only.
    pub price: f64,
    /// Currency of `price`.
    pub currency_code: String,
    /// First variant id, the one-click add-to-cart target.
    pub variant_id: Option<String>,
    /// `IN STOCK` / `OUT OF STOCK`.
    pub stock_badge: &'static str,
}

impl From<Product> for FeaturedProduct {
    fn from(product: Product) -> Self {
        let image = product
            .featured_image
            .as_ref()
            .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), |img| img.url.clone());
        let image_alt = product
            .featured_image
            .as_ref()
            .and_then(|img| img.alt.clone())
            .unwrap_or_else(|| product.title.clone());
        let price = product.price_range.min.parse().unwrap_or(0.0);
        let currency_code = product.price_range.currency_code.clone();
        let variant_id = product.variants.first().map(|variant| variant.id.clone());
        let stock_badge = catalog::stock_badge(catalog::is_available(&product, None));

        Self {
            product,
            image,
            image_alt,
            price,
            currency_code,
            variant_id,
            stock_badge,
        }
    }
}

/// List products from the catalog.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ProductsResponse<Product>>> {
    let first = query.first.unwrap_or(DEFAULT_PAGE_SIZE);
    let products = state.storefront()?.get_products(first).await?;

    Ok(Json(ProductsResponse { products }))
}

/// Fetch one product by handle.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Product>> {
    let product = state.storefront()?.get_product_by_handle(&handle).await?;

    Ok(Json(product))
}

/// Fetch the configured featured products in one aliased query.
#[instrument(skip(state))]
pub async fn featured(
    State(state): State<AppState>,
) -> Result<Json<ProductsResponse<FeaturedProduct>>> {
    let handles = &state.config().featured_handles;
    let products = state.storefront()?.get_products_by_handles(handles).await?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(FeaturedProduct::from).collect(),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shopify::types::{Money, PriceRange, ProductImage, ProductVariant};

    fn product(featured_image: Option<ProductImage>, available: bool) -> Product {
        Product {
            id: "gid://shopify/Product/7".to_string(),
            title: "Hello World Embroidered Tech T-Shirt".to_string(),
            handle: "hello-world-embroidered-tech-t-shirt".to_string(),
            description: String::new(),
            available_for_sale: available,
            total_inventory: None,
            product_type: String::new(),
            vendor: String::new(),
            tags: vec![],
            created_at: None,
            updated_at: None,
            options: vec![],
            featured_image,
            images: vec![],
            variants: vec![ProductVariant {
                id: "gid://shopify/ProductVariant/11".to_string(),
                title: "Default Title".to_string(),
                available_for_sale: available,
                quantity_available: None,
                price: Money {
                    amount: "34.5".to_string(),
                    currency_code: "USD".to_string(),
                },
                compare_at_price: None,
                selected_options: vec![],
                image: None,
            }],
            price_range: PriceRange {
                min: "34.5".to_string(),
                max: "34.5".to_string(),
                currency_code: "USD".to_string(),
            },
        }
    }

    #[test]
    fn test_featured_compat_fields() {
        let image = ProductImage {
            id: None,
            url: "https://cdn.shopify.com/tee.jpg".to_string(),
            alt: None,
            width: None,
            height: None,
        };

        let featured = FeaturedProduct::from(product(Some(image), true));

        assert_eq!(featured.image, "https://cdn.shopify.com/tee.jpg");
        // Alt falls back to the title when the photo has none
        assert_eq!(featured.image_alt, "Hello World Embroidered Tech T-Shirt");
        assert!((featured.price - 34.5).abs() < f64::EPSILON);
        assert_eq!(featured.currency_code, "USD");
        assert_eq!(
            featured.variant_id.as_deref(),
            Some("gid://shopify/ProductVariant/11")
        );
        assert_eq!(featured.stock_badge, "IN STOCK");
    }

    #[test]
    fn test_featured_placeholder_image() {
        let featured = FeaturedProduct::from(product(None, true));
        assert_eq!(featured.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_featured_out_of_stock_badge() {
        let featured = FeaturedProduct::from(product(None, false));
        assert_eq!(featured.stock_badge, "OUT OF STOCK");
    }

    #[test]
    fn test_featured_serializes_flat() {
        let value = serde_json::to_value(FeaturedProduct::from(product(None, true))).unwrap();

        // Compat fields sit next to the normalized product fields
        assert_eq!(value["handle"], "hello-world-embroidered-tech-t-shirt");
        assert_eq!(value["image"], PLACEHOLDER_IMAGE);
        assert_eq!(value["stockBadge"], "IN STOCK");
        assert_eq!(value["price"], 34.5);
        assert!(value.get("priceRange").is_some());
    }
}
