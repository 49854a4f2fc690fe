//! Static curated catalog.
//!
//! The one product endpoint that never talks to Shopify: a fixed merchandise
//! list served straight from memory, used by the home page strip and as a
//! fallback when the store has no API credentials yet.

use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};

/// One curated catalog entry. Prices are display strings, handles are
/// site-relative paths.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    pub id: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub price: &'static str,
    pub handle: &'static str,
}

/// The curated merchandise list.
pub const CATALOG: &[CatalogItem] = &[
    CatalogItem {
        id: "1",
        title: "Hack Hoodie",
        image: "/images/hack-hoodie.png",
        price: "$49",
        handle: "/product/hack-hoodie",
    },
    CatalogItem {
        id: "2",
        title: "Terminal Tee",
        image: "/images/terminal-tee.png",
        price: "$29",
        handle: "/product/terminal-tee",
    },
    CatalogItem {
        id: "3",
        title: "Shell Cap",
        image: "/images/shell-cap.png",
        price: "$25",
        handle: "/product/shell-cap",
    },
];

/// Serve the curated catalog. Always succeeds.
pub async fn index() -> Json<Value> {
    Json(json!({ "products": CATALOG }))
}
