//! Raw Storefront API response shapes.
//!
//! These structs mirror the GraphQL documents in [`super::queries`] field for
//! field, edge wrappers included. They never leave this module tree; the
//! conversions layer flattens them into the [`crate::shopify::types`] model.
//!
//! Fields the narrower documents skip (vendor, tags, timestamps, compare-at
//! prices) are optional or defaulted so every document deserializes through
//! the same product shape.

use serde::Deserialize;

/// Generic relay-style connection: `{ edges: [{ node }] }`.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// Unwrap the edge envelopes into the plain node list.
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

// ============================================================================
// Products
// ============================================================================

/// `data` for [`super::queries::PRODUCTS_QUERY`].
#[derive(Debug, Deserialize)]
pub struct ProductsData {
    pub products: Connection<Product>,
}

/// `data` for [`super::queries::PRODUCT_BY_HANDLE_QUERY`].
#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub product: Option<Product>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub available_for_sale: Option<bool>,
    #[serde(default)]
    pub total_inventory: Option<i64>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub featured_image: Option<Image>,
    #[serde(default)]
    pub images: Connection<Image>,
    #[serde(default)]
    pub variants: Connection<Variant>,
    pub price_range: PriceRange,
}

#[derive(Debug, Deserialize)]
pub struct ProductOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub available_for_sale: Option<bool>,
    #[serde(default)]
    pub quantity_available: Option<i64>,
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

/// `maxVariantPrice` is absent from the featured-product document; the
/// conversion falls back to the minimum when it is missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_variant_price: Money,
    #[serde(default)]
    pub max_variant_price: Option<Money>,
}

// ============================================================================
// Cart creation
// ============================================================================

/// `data` for [`super::queries::CART_CREATE_MUTATION`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreateData {
    pub cart_create: Option<CartCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreatePayload {
    pub cart: Option<Cart>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    pub checkout_url: String,
    #[serde(default)]
    pub total_tax: Option<Money>,
    pub cost: CartCost,
    #[serde(default)]
    pub lines: Connection<CartLine>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    pub subtotal_amount: Money,
    pub total_amount: Money,
}

#[derive(Debug, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub quantity: i64,
    pub merchandise: Merchandise,
}

/// Inline `... on ProductVariant` selection on the cart line.
#[derive(Debug, Deserialize)]
pub struct Merchandise {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<Image>,
    pub price: Money,
    pub product: MerchandiseProduct,
}

#[derive(Debug, Deserialize)]
pub struct MerchandiseProduct {
    pub title: String,
}
