//! Product smoke commands.
//!
//! Fetch through the same client the server uses and print what came back,
//! so a bad token or a renamed product shows up before a deploy does.

use rootwear_storefront::catalog;
use rootwear_storefront::shopify::types::Product;

use super::{CliError, storefront_client};

/// List products and print a one-line summary per product.
pub async fn list(first: i64) -> Result<(), CliError> {
    let (_config, client) = storefront_client()?;
    let products = client.get_products(first).await?;

    println!("Found {} product(s)", products.len());
    for product in &products {
        print_summary(product);
    }

    Ok(())
}

/// Fetch one product by handle and print its full normalized JSON.
pub async fn show(handle: &str) -> Result<(), CliError> {
    let (_config, client) = storefront_client()?;
    let product = client.get_product_by_handle(handle).await?;

    println!("{}", serde_json::to_string_pretty(&product)?);

    Ok(())
}

/// Fetch the configured featured products and print summaries.
pub async fn featured() -> Result<(), CliError> {
    let (config, client) = storefront_client()?;
    let handles = &config.featured_handles;

    println!(
        "Fetching {} featured handle(s): {}",
        handles.len(),
        handles
            .iter()
            .map(rootwear_core::Handle::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let products = client.get_products_by_handles(handles).await?;

    if products.len() < handles.len() {
        println!(
            "warning: {} handle(s) did not resolve to a product",
            handles.len() - products.len()
        );
    }
    for product in &products {
        print_summary(product);
    }

    Ok(())
}

fn print_summary(product: &Product) {
    let badge = catalog::stock_badge(catalog::is_available(product, None));
    println!(
        "  {:<40} {:>8} {}  [{badge}]  ({} variant(s))",
        product.handle,
        product.price_range.min,
        product.price_range.currency_code,
        product.variants.len(),
    );
}
