//! Stock availability logic.
//!
//! Availability combines three signals with AND semantics: the product-level
//! flag, the selected variant's flag, and the product inventory count. The
//! variant signal passes when no variant is selected, so listing views can
//! gate on product data alone. An unknown inventory count (Shopify returns
//! null when counts are not tracked) also passes.

use crate::shopify::types::{Product, ProductVariant};

/// Whether the product, in the given variant selection, can be bought.
#[must_use]
pub fn is_available(product: &Product, variant: Option<&ProductVariant>) -> bool {
    let inventory_available = product.total_inventory.is_none_or(|count| count > 0);
    let variant_available = variant.is_none_or(|variant| variant.available_for_sale);

    product.available_for_sale && variant_available && inventory_available
}

/// Uppercase stock badge for product cards.
#[must_use]
pub const fn stock_badge(available: bool) -> &'static str {
    if available { "IN STOCK" } else { "OUT OF STOCK" }
}

/// Title-case stock label for the product detail view.
#[must_use]
pub const fn stock_label(available: bool) -> &'static str {
    if available { "In Stock" } else { "Out of Stock" }
}
