//! Checkout smoke command.
//!
//! Creates a real Shopify cart for one variant and prints the hosted
//! checkout URL plus the upstream totals. Nothing is charged until someone
//! opens the URL and pays.

use rootwear_storefront::shopify::types::CartLineInput;

use super::{CliError, storefront_client};

/// Create a one-line cart and print the hosted checkout session.
pub async fn create(variant_id: &str, quantity: i64) -> Result<(), CliError> {
    let (_config, client) = storefront_client()?;

    let session = client
        .create_cart(vec![CartLineInput {
            merchandise_id: variant_id.to_string(),
            quantity,
        }])
        .await?;

    println!("Cart created: {}", session.id);
    println!(
        "  subtotal: {} {}",
        session.subtotal_price.amount, session.subtotal_price.currency_code
    );
    if let Some(tax) = &session.total_tax {
        println!("  tax:      {} {}", tax.amount, tax.currency_code);
    }
    println!(
        "  total:    {} {}",
        session.total_price.amount, session.total_price.currency_code
    );
    println!("\nHosted checkout: {}", session.web_url);

    Ok(())
}
