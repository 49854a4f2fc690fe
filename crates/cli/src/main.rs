//! Rootwear CLI - smoke tools against the live Shopify API.
//!
//! # Usage
//!
//! ```bash
//! # List products from the store
//! rw-cli products --first 10
//!
//! # Fetch one product by handle
//! rw-cli product hello-world-embroidered-tech-t-shirt
//!
//! # Fetch the configured featured products
//! rw-cli featured
//!
//! # Create a hosted checkout for one variant and print its URL
//! rw-cli checkout "gid://shopify/ProductVariant/123" --quantity 2
//! ```
//!
//! # Environment Variables
//!
//! Same as the storefront server: `SHOPIFY_DOMAIN`,
//! `SHOPIFY_STOREFRONT_ACCESS_TOKEN`, optional `SHOPIFY_API_VERSION` and
//! `FEATURED_PRODUCT_HANDLES`; loaded from `.env` when present.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The whole point of these commands is to print to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rw-cli")]
#[command(author, version, about = "Rootwear CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products from the store
    Products {
        /// How many products to fetch
        #[arg(short, long, default_value_t = 50)]
        first: i64,
    },
    /// Fetch one product by handle
    Product {
        /// Product handle (URL slug)
        handle: String,
    },
    /// Fetch the configured featured products
    Featured,
    /// Create a hosted checkout for one variant and print its URL
    Checkout {
        /// Variant GID, e.g. gid://shopify/ProductVariant/123
        variant_id: String,

        /// Quantity to buy
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products { first } => commands::products::list(first).await?,
        Commands::Product { handle } => commands::products::show(&handle).await?,
        Commands::Featured => commands::products::featured().await?,
        Commands::Checkout {
            variant_id,
            quantity,
        } => commands::checkout::create(&variant_id, quantity).await?,
    }
    Ok(())
}
