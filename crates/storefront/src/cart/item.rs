//! Cart line items and their price shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shopify::types::{CartLineInput, SelectedOption};

/// Unit price of a cart line.
///
/// Two shapes exist in persisted carts: Shopify-sourced items carry a nested
/// `{amount, currencyCode}` object, while items added from the static
/// merchandise catalog carry a plain number. Both deserialize here; totals
/// read the amount the same way regardless of shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinePrice {
    #[serde(rename_all = "camelCase")]
    Nested {
        amount: Decimal,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        currency_code: Option<String>,
    },
    Plain(Decimal),
}

impl LinePrice {
    /// The numeric unit amount, whichever shape carries it.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        match self {
            Self::Nested { amount, .. } | Self::Plain(amount) => *amount,
        }
    }

    /// The currency code, when the shape carries one.
    #[must_use]
    pub fn currency_code(&self) -> Option<&str> {
        match self {
            Self::Nested { currency_code, .. } => currency_code.as_deref(),
            Self::Plain(_) => None,
        }
    }
}

impl From<Decimal> for LinePrice {
    fn from(amount: Decimal) -> Self {
        Self::Plain(amount)
    }
}

/// One entry in the cart: a purchasable thing and a quantity.
///
/// `id` is the variant id for Shopify products and a catalog key for static
/// merchandise; it is the merge key for [`crate::cart::CartStore::add`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    pub title: String,
    pub price: LinePrice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_options: Option<Vec<SelectedOption>>,
}

const fn default_quantity() -> i64 {
    1
}

impl CartLineItem {
    /// The checkout line for this item. Prefers the explicit variant id and
    /// falls back to the merge key, which is the variant id for items added
    /// from a product page.
    #[must_use]
    pub fn checkout_line(&self) -> CartLineInput {
        CartLineInput {
            merchandise_id: self
                .variant_id
                .clone()
                .unwrap_or_else(|| self.id.clone()),
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_price_deserializes() {
        let json = r#"{"amount": "49.0", "currencyCode": "USD"}"#;
        let price: LinePrice = serde_json::from_str(json).unwrap();

        assert_eq!(price.amount(), Decimal::new(490, 1));
        assert_eq!(price.currency_code(), Some("USD"));
    }

    #[test]
    fn test_plain_number_price_deserializes() {
        let price: LinePrice = serde_json::from_str("49").unwrap();

        assert_eq!(price.amount(), Decimal::from(49));
        assert_eq!(price.currency_code(), None);
    }

    #[test]
    fn test_line_item_defaults_quantity() {
        let json = r#"{"id": "hoodie-1", "title": "Hack Hoodie", "price": 49}"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.quantity, 1);
        assert!(item.variant_id.is_none());
    }

    #[test]
    fn test_checkout_line_prefers_variant_id() {
        let json = r#"{
            "id": "gid://shopify/ProductVariant/1",
            "variantId": "gid://shopify/ProductVariant/1",
            "title": "Hack Hoodie - Black / M",
            "price": {"amount": "49.0"},
            "quantity": 2
        }"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();

        let line = item.checkout_line();
        assert_eq!(line.merchandise_id, "gid://shopify/ProductVariant/1");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_checkout_line_falls_back_to_id() {
        let json = r#"{"id": "hoodie-1", "title": "Hack Hoodie", "price": 49}"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.checkout_line().merchandise_id, "hoodie-1");
    }

    #[test]
    fn test_round_trip_preserves_shape() {
        let json = r#"{"id":"hoodie-1","title":"Hack Hoodie","price":49,"quantity":3}"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();

        let rendered = serde_json::to_value(&item).unwrap();
        assert_eq!(rendered["price"], serde_json::json!("49"));
        assert_eq!(rendered["quantity"], 3);
        assert!(rendered.get("variantId").is_none());

        let reparsed: CartLineItem = serde_json::from_value(rendered).unwrap();
        assert_eq!(reparsed, item);
    }
}
