//! Product detail view state.
//!
//! [`ProductPage`] tracks one product's in-progress option selection, the
//! variant it resolves to, the gallery image on display, and the quantity
//! being added. It is the single place the selection, availability and
//! add-to-cart rules combine.

use rust_decimal::Decimal;

use crate::cart::{CartLineItem, LinePrice};
use crate::shopify::types::{Product, ProductImage, ProductVariant};

use super::availability;
use super::resolver::{self, SelectionMap};

#[derive(Debug, Clone)]
pub struct ProductPage {
    product: Product,
    selection: SelectionMap,
    variant_index: Option<usize>,
    image_index: usize,
    quantity: i64,
}

impl ProductPage {
    /// Open a product with its default selection: the first value of every
    /// option, resolved to a variant when the data allows it.
    #[must_use]
    pub fn new(product: Product) -> Self {
        let selection = resolver::default_selection(&product);
        let variant_index = resolver::variant_index(&product, &selection);

        let mut page = Self {
            product,
            selection,
            variant_index,
            image_index: 0,
            quantity: 1,
        };
        page.sync_image();
        page
    }

    /// Choose a value for one option and re-resolve the variant. When the
    /// new selection matches nothing, no variant is selected and adding to
    /// cart is disabled until the selection changes again.
    pub fn select(&mut self, name: &str, value: &str) {
        self.selection.insert(name.to_string(), value.to_string());
        self.variant_index = resolver::variant_index(&self.product, &self.selection);
        self.sync_image();
    }

    /// Set the quantity to add. Values below one are raised to one.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.max(1);
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    #[must_use]
    pub fn selected_variant(&self) -> Option<&ProductVariant> {
        self.variant_index
            .and_then(|index| self.product.variants.get(index))
    }

    /// The gallery image on display: the image synced to the selected
    /// variant, else the first image, else the product's featured image.
    #[must_use]
    pub fn main_image(&self) -> Option<&ProductImage> {
        self.product
            .images
            .get(self.image_index)
            .or(self.product.featured_image.as_ref())
    }

    /// Whether the product, under the current selection, can be bought.
    #[must_use]
    pub fn is_available(&self) -> bool {
        availability::is_available(&self.product, self.selected_variant())
    }

    /// Stock wording for the detail view.
    #[must_use]
    pub fn stock_label(&self) -> &'static str {
        availability::stock_label(self.is_available())
    }

    /// Adding to cart needs a resolved variant that is buyable.
    #[must_use]
    pub fn can_add_to_cart(&self) -> bool {
        self.selected_variant().is_some() && self.is_available()
    }

    /// The display price: the selected variant's, else the range minimum.
    #[must_use]
    pub fn current_amount(&self) -> &str {
        self.selected_variant()
            .map_or(self.product.price_range.min.as_str(), |variant| {
                variant.price.amount.as_str()
            })
    }

    #[must_use]
    pub fn current_currency(&self) -> &str {
        self.selected_variant().map_or_else(
            || self.product.price_range.currency_code.as_str(),
            |variant| variant.price.currency_code.as_str(),
        )
    }

    /// The cart line for the current state, when adding is allowed.
    #[must_use]
    pub fn cart_line(&self) -> Option<CartLineItem> {
        if !self.can_add_to_cart() {
            return None;
        }
        let variant = self.selected_variant()?;
        let amount = variant.price.amount.parse::<Decimal>().ok()?;

        Some(CartLineItem {
            id: variant.id.clone(),
            variant_id: Some(variant.id.clone()),
            title: format!("{} - {}", self.product.title, variant.title),
            price: LinePrice::Nested {
                amount,
                currency_code: None,
            },
            currency_code: Some(self.current_currency().to_string()),
            image: self.main_image().map(|image| image.url.clone()),
            handle: None,
            quantity: self.quantity,
            selected_options: Some(variant.selected_options.clone()),
        })
    }

    /// Point the gallery at the selected variant's image when that image is
    /// part of the product gallery. Otherwise the current index stays.
    fn sync_image(&mut self) {
        let Some(url) = self
            .selected_variant()
            .and_then(|variant| variant.image.as_ref())
            .map(|image| image.url.clone())
        else {
            return;
        };

        if let Some(position) = self.product.images.iter().position(|image| image.url == url) {
            self.image_index = position;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shopify::types::{Money, PriceRange, ProductOption, SelectedOption};

    fn image(url: &str) -> ProductImage {
        ProductImage {
            id: None,
            url: url.to_string(),
            alt: None,
            width: None,
            height: None,
        }
    }

    fn variant(id: &str, options: &[(&str, &str)], image_url: Option<&str>) -> ProductVariant {
        ProductVariant {
            id: id.to_string(),
            title: options
                .iter()
                .map(|(_, value)| *value)
                .collect::<Vec<_>>()
                .join(" / "),
            available_for_sale: true,
            quantity_available: Some(5),
            price: Money {
                amount: "49.0".to_string(),
                currency_code: "USD".to_string(),
            },
            compare_at_price: None,
            selected_options: options
                .iter()
                .map(|(name, value)| SelectedOption {
                    name: (*name).to_string(),
                    value: (*value).to_string(),
                })
                .collect(),
            image: image_url.map(image),
        }
    }

    fn hoodie() -> Product {
        Product {
            id: "gid://shopify/Product/1".to_string(),
            title: "Hack Hoodie".to_string(),
            handle: "hack-hoodie".to_string(),
            description: String::new(),
            available_for_sale: true,
            total_inventory: Some(20),
            product_type: String::new(),
            vendor: String::new(),
            tags: vec![],
            created_at: None,
            updated_at: None,
            options: vec![
                ProductOption {
                    id: None,
                    name: "Color".to_string(),
                    values: vec!["Red".to_string(), "Blue".to_string()],
                },
                ProductOption {
                    id: None,
                    name: "Size".to_string(),
                    values: vec!["S".to_string(), "M".to_string()],
                },
            ],
            featured_image: Some(image("featured.jpg")),
            images: vec![image("red.jpg"), image("blue.jpg")],
            variants: vec![
                variant("v1", &[("Color", "Red"), ("Size", "S")], Some("red.jpg")),
                variant("v2", &[("Color", "Red"), ("Size", "M")], Some("red.jpg")),
                variant("v3", &[("Color", "Blue"), ("Size", "S")], Some("blue.jpg")),
                variant("v4", &[("Color", "Blue"), ("Size", "M")], Some("blue.jpg")),
            ],
            price_range: PriceRange {
                min: "49.0".to_string(),
                max: "49.0".to_string(),
                currency_code: "USD".to_string(),
            },
        }
    }

    #[test]
    fn test_opens_with_default_variant() {
        let page = ProductPage::new(hoodie());

        assert_eq!(page.selected_variant().unwrap().id, "v1");
        assert_eq!(page.selection().get("Color").unwrap(), "Red");
        assert_eq!(page.main_image().unwrap().url, "red.jpg");
        assert!(page.can_add_to_cart());
    }

    #[test]
    fn test_select_switches_variant_and_image() {
        let mut page = ProductPage::new(hoodie());
        page.select("Color", "Blue");
        page.select("Size", "M");

        assert_eq!(page.selected_variant().unwrap().id, "v4");
        assert_eq!(page.main_image().unwrap().url, "blue.jpg");
    }

    #[test]
    fn test_unmatched_selection_disables_add() {
        let mut page = ProductPage::new(hoodie());
        page.select("Color", "Green");

        assert!(page.selected_variant().is_none());
        assert!(!page.can_add_to_cart());
        assert!(page.cart_line().is_none());
        // Display falls back to the range minimum.
        assert_eq!(page.current_amount(), "49.0");
    }

    #[test]
    fn test_unavailable_product_reads_out_of_stock() {
        let mut product = hoodie();
        product.available_for_sale = false;

        let page = ProductPage::new(product);
        assert!(!page.can_add_to_cart());
        assert_eq!(page.stock_label(), "Out of Stock");
        assert_eq!(availability::stock_badge(page.is_available()), "OUT OF STOCK");
    }

    #[test]
    fn test_cart_line_contents() {
        let mut page = ProductPage::new(hoodie());
        page.select("Color", "Blue");
        page.set_quantity(3);

        let line = page.cart_line().unwrap();
        assert_eq!(line.id, "v3");
        assert_eq!(line.variant_id.as_deref(), Some("v3"));
        assert_eq!(line.title, "Hack Hoodie - Blue / S");
        assert_eq!(line.price.amount(), Decimal::new(490, 1));
        assert_eq!(line.price.currency_code(), None);
        assert_eq!(line.currency_code.as_deref(), Some("USD"));
        assert_eq!(line.image.as_deref(), Some("blue.jpg"));
        assert_eq!(line.quantity, 3);
        assert_eq!(line.selected_options.unwrap().len(), 2);
    }

    #[test]
    fn test_quantity_is_clamped() {
        let mut page = ProductPage::new(hoodie());
        page.set_quantity(0);
        assert_eq!(page.quantity(), 1);

        page.set_quantity(-2);
        assert_eq!(page.quantity(), 1);
    }

    #[test]
    fn test_variant_image_outside_gallery_keeps_index() {
        let mut product = hoodie();
        product.variants = vec![variant(
            "v1",
            &[("Color", "Red"), ("Size", "S")],
            Some("not-in-gallery.jpg"),
        )];

        let page = ProductPage::new(product);
        assert_eq!(page.main_image().unwrap().url, "red.jpg");
    }

    #[test]
    fn test_no_images_falls_back_to_featured() {
        let mut product = hoodie();
        product.images = vec![];

        let page = ProductPage::new(product);
        assert_eq!(page.main_image().unwrap().url, "featured.jpg");
    }
}
