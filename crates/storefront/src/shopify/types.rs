//! Shared types for the Shopify Storefront API.
//!
//! These are the normalized domain types the rest of the service works with.
//! The upstream API mixes flat lists and edge-list connections depending on
//! the query; the conversion layer in [`super::storefront`] flattens all of
//! that into these shapes, so nothing outside the client ever sees an edge
//! wrapper. Wire casing is camelCase to stay compatible with the upstream
//! field names consumers already know.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use rootwear_core::{Price, PriceError};

/// A monetary amount as reported by Shopify.
///
/// The amount stays a decimal string end to end; arithmetic goes through
/// [`Money::price`] so nothing rides on floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount, e.g. `"49.00"`.
    pub amount: String,
    /// ISO 4217 currency code, e.g. `"USD"`.
    pub currency_code: String,
}

impl Money {
    /// Parse into a [`Price`] for arithmetic and display.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not a valid decimal or the currency
    /// code is unsupported.
    pub fn price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.amount, &self.currency_code)
    }
}

/// Normalized product price range.
///
/// Upstream reports `minVariantPrice`/`maxVariantPrice` objects; consumers
/// get the collapsed `{min, max, currencyCode}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    /// Minimum variant price amount.
    pub min: String,
    /// Maximum variant price amount.
    pub max: String,
    /// Currency code shared by both bounds.
    pub currency_code: String,
}

/// A product image.
///
/// Serialization always emits both `url` and the legacy `src` alias with the
/// same value; older consumers read `src`, newer ones read `url`.
/// Deserialization accepts either key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    /// Image identifier, when the upstream provides one.
    pub id: Option<String>,
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt: Option<String>,
    /// Pixel width, when known.
    pub width: Option<i64>,
    /// Pixel height, when known.
    pub height: Option<i64>,
}

impl Serialize for ProductImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProductImage", 6)?;
        state.serialize_field("id", &self.id)?;
        // Both keys carry the same value, url being canonical
        state.serialize_field("src", &self.url)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("alt", &self.alt)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ProductImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            id: Option<String>,
            #[serde(default)]
            url: Option<String>,
            #[serde(default)]
            src: Option<String>,
            #[serde(default)]
            alt: Option<String>,
            #[serde(default)]
            width: Option<i64>,
            #[serde(default)]
            height: Option<i64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let url = raw
            .url
            .or(raw.src)
            .ok_or_else(|| de::Error::missing_field("url"))?;

        Ok(Self {
            id: raw.id,
            url,
            alt: raw.alt,
            width: raw.width,
            height: raw.height,
        })
    }
}

/// One selected option on a variant, e.g. `Color: Blue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    /// Option name, e.g. `"Color"`.
    pub name: String,
    /// Chosen value, e.g. `"Blue"`.
    pub value: String,
}

/// A product option definition, e.g. Color with its permissible values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Option identifier, when the upstream provides one.
    #[serde(default)]
    pub id: Option<String>,
    /// Option name, e.g. `"Size"`.
    pub name: String,
    /// Permissible values in display order.
    pub values: Vec<String>,
}

/// A purchasable product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant GID, e.g. `"gid://shopify/ProductVariant/123"`.
    pub id: String,
    /// Variant title, e.g. `"Blue / M"`.
    pub title: String,
    /// Normalized availability: available unless upstream said `false`.
    #[serde(default = "default_true")]
    pub available_for_sale: bool,
    /// Sellable quantity, when inventory is tracked.
    #[serde(default)]
    pub quantity_available: Option<i64>,
    /// Unit price.
    pub price: Money,
    /// Pre-discount price, when the variant is on sale.
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// One entry per product option.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
    /// Variant-specific image (e.g. the colorway photo).
    #[serde(default)]
    pub image: Option<ProductImage>,
}

/// A normalized product with its options, images, and variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product GID.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub handle: String,
    /// Plain-text description.
    #[serde(default)]
    pub description: String,
    /// Normalized availability: available unless upstream said `false`.
    #[serde(default = "default_true")]
    pub available_for_sale: bool,
    /// Total sellable inventory across variants; `None` when untracked.
    #[serde(default)]
    pub total_inventory: Option<i64>,
    /// Product type label, empty when unset.
    #[serde(default)]
    pub product_type: String,
    /// Vendor name, empty when unset.
    #[serde(default)]
    pub vendor: String,
    /// Tags in store order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp (ISO 8601), when queried.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp (ISO 8601), when queried.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Option definitions in display order.
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// The product's primary image.
    #[serde(default)]
    pub featured_image: Option<ProductImage>,
    /// All product images in display order.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// All variants in display order.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Collapsed price range.
    pub price_range: PriceRange,
}

const fn default_true() -> bool {
    true
}

// =============================================================================
// Checkout types
// =============================================================================

/// One line of a cart-creation request: a variant and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    /// Variant GID to purchase.
    pub merchandise_id: String,
    /// Requested quantity.
    pub quantity: i64,
}

/// A line item echoed back by the checkout mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLineItem {
    /// Cart line GID.
    pub id: String,
    /// Purchased variant GID.
    pub variant_id: String,
    /// Variant title.
    pub title: String,
    /// Parent product title.
    pub product_title: String,
    /// Unit price as reported upstream.
    pub price: Money,
    /// Variant image URL, when present.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Variant image alt text, when present.
    #[serde(default)]
    pub image_alt: Option<String>,
    /// Quantity accepted upstream.
    pub quantity: i64,
}

/// A hosted-checkout session created from cart contents.
///
/// Totals are upstream-authoritative and never recomputed locally. Field
/// names keep the legacy `subtotalPrice`/`totalPrice` wire keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// Cart GID.
    pub id: String,
    /// Hosted checkout URL to redirect the buyer to.
    pub web_url: String,
    /// Pre-tax subtotal.
    pub subtotal_price: Money,
    /// Total including tax and discounts.
    pub total_price: Money,
    /// Tax portion, when upstream reports it.
    #[serde(default)]
    pub total_tax: Option<Money>,
    /// Accepted line items.
    #[serde(default)]
    pub line_items: Vec<CheckoutLineItem>,
}
