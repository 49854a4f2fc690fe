//! Product type conversion functions.
//!
//! Flattens the edge-wrapped wire shapes into the normalized product model:
//! image lists and variant lists become plain vectors, `altText` becomes
//! `alt`, and the price range collapses to `{min, max, currencyCode}`.

use crate::shopify::storefront::wire;
use crate::shopify::types::{
    Money, PriceRange, Product, ProductImage, ProductOption, ProductVariant, SelectedOption,
};

/// Convert a full product listing response.
pub fn convert_products(data: wire::ProductsData) -> Vec<Product> {
    data.products
        .into_nodes()
        .into_iter()
        .map(convert_product)
        .collect()
}

pub fn convert_product(product: wire::Product) -> Product {
    Product {
        id: product.id,
        title: product.title,
        handle: product.handle,
        description: product.description,
        // A product is treated as available unless Shopify explicitly says
        // otherwise. Missing means the document did not ask.
        available_for_sale: product.available_for_sale.unwrap_or(true),
        total_inventory: product.total_inventory,
        product_type: product.product_type.unwrap_or_default(),
        vendor: product.vendor.unwrap_or_default(),
        tags: product.tags.unwrap_or_default(),
        created_at: product.created_at,
        updated_at: product.updated_at,
        options: product.options.into_iter().map(convert_option).collect(),
        featured_image: product.featured_image.map(convert_image),
        images: product
            .images
            .into_nodes()
            .into_iter()
            .map(convert_image)
            .collect(),
        variants: product
            .variants
            .into_nodes()
            .into_iter()
            .map(convert_variant)
            .collect(),
        price_range: convert_price_range(product.price_range),
    }
}

fn convert_image(image: wire::Image) -> ProductImage {
    ProductImage {
        id: image.id,
        url: image.url,
        alt: image.alt_text,
        width: image.width,
        height: image.height,
    }
}

fn convert_option(option: wire::ProductOption) -> ProductOption {
    ProductOption {
        id: option.id,
        name: option.name,
        values: option.values,
    }
}

fn convert_variant(variant: wire::Variant) -> ProductVariant {
    ProductVariant {
        id: variant.id,
        title: variant.title,
        available_for_sale: variant.available_for_sale.unwrap_or(true),
        quantity_available: variant.quantity_available,
        price: convert_money(variant.price),
        compare_at_price: variant.compare_at_price.map(convert_money),
        selected_options: variant
            .selected_options
            .into_iter()
            .map(convert_selected_option)
            .collect(),
        image: variant.image.map(convert_image),
    }
}

fn convert_selected_option(option: wire::SelectedOption) -> SelectedOption {
    SelectedOption {
        name: option.name,
        value: option.value,
    }
}

pub(super) fn convert_money(money: wire::Money) -> Money {
    Money {
        amount: money.amount,
        currency_code: money.currency_code,
    }
}

/// Collapse Shopify's min/max money pair into the flat range shape. Documents
/// that only ask for the minimum get `max == min`.
fn convert_price_range(range: wire::PriceRange) -> PriceRange {
    let wire::PriceRange {
        min_variant_price,
        max_variant_price,
    } = range;

    let min = min_variant_price.amount;
    let currency_code = min_variant_price.currency_code;
    let max = max_variant_price.map_or_else(|| min.clone(), |money| money.amount);

    PriceRange {
        min,
        max,
        currency_code,
    }
}
