//! Checkout session conversion functions.
//!
//! Turns a `cartCreate` cart payload into the flat [`CheckoutSession`] the
//! rest of the service works with: line edges become plain items and the
//! cost block is spread into subtotal and total fields.

use super::products::convert_money;
use crate::shopify::storefront::wire;
use crate::shopify::types::{CheckoutLineItem, CheckoutSession};

pub fn convert_checkout_session(cart: wire::Cart) -> CheckoutSession {
    let line_items = cart
        .lines
        .into_nodes()
        .into_iter()
        .map(convert_line_item)
        .collect();

    CheckoutSession {
        id: cart.id,
        web_url: cart.checkout_url,
        subtotal_price: convert_money(cart.cost.subtotal_amount),
        total_price: convert_money(cart.cost.total_amount),
        total_tax: cart.total_tax.map(convert_money),
        line_items,
    }
}

fn convert_line_item(line: wire::CartLine) -> CheckoutLineItem {
    let merchandise = line.merchandise;
    let (image_url, image_alt) = merchandise
        .image
        .map_or((None, None), |image| (Some(image.url), image.alt_text));

    CheckoutLineItem {
        id: line.id,
        variant_id: merchandise.id,
        title: merchandise.title,
        product_title: merchandise.product.title,
        price: convert_money(merchandise.price),
        image_url,
        image_alt,
        quantity: line.quantity,
    }
}
