//! Option-selection to variant resolution.
//!
//! A product sells concrete variants (one per option combination). These
//! functions map an in-progress selection like `{"Color": "Black", "Size":
//! "M"}` to the variant being bought, and pick swatch images for colour
//! values.

use std::collections::BTreeMap;

use crate::shopify::types::{Product, ProductImage, ProductVariant};

/// Option name to chosen value for one product, e.g.
/// `{"Color": "Black", "Size": "M"}`.
pub type SelectionMap = BTreeMap<String, String>;

/// Initial selection for a freshly loaded product: the first listed value of
/// every option. Options with no values are skipped.
#[must_use]
pub fn default_selection(product: &Product) -> SelectionMap {
    product
        .options
        .iter()
        .filter_map(|option| {
            option
                .values
                .first()
                .map(|value| (option.name.clone(), value.clone()))
        })
        .collect()
}

/// Position of the first variant whose selected options all agree with
/// `selection`.
///
/// The match is exact on every option the variant carries; a variant
/// agreeing on two of three options is not a match. `None` means the option
/// and variant data are inconsistent upstream and nothing is purchasable
/// for this selection.
#[must_use]
pub fn variant_index(product: &Product, selection: &SelectionMap) -> Option<usize> {
    product.variants.iter().position(|variant| {
        variant.selected_options.iter().all(|option| {
            selection
                .get(&option.name)
                .is_some_and(|value| value == &option.value)
        })
    })
}

/// The first variant fully matching `selection`, in listed order.
#[must_use]
pub fn resolve_variant<'a>(
    product: &'a Product,
    selection: &SelectionMap,
) -> Option<&'a ProductVariant> {
    variant_index(product, selection).and_then(|index| product.variants.get(index))
}

/// Option names that carry a colour axis ("Color", "Colour", "Shell Color").
fn is_color_option(name: &str) -> bool {
    let name = name.to_lowercase();
    name.contains("color") || name.contains("colour")
}

/// Permissible colour values for a product.
///
/// Prefers the product's own colour option definition; falls back to
/// scanning variants when the options list does not declare one. Order of
/// first appearance is preserved.
#[must_use]
pub fn color_values(product: &Product) -> Vec<String> {
    if let Some(option) = product
        .options
        .iter()
        .find(|option| is_color_option(&option.name))
        && !option.values.is_empty()
    {
        return option.values.clone();
    }

    let mut values = Vec::new();
    for variant in &product.variants {
        for option in &variant.selected_options {
            if is_color_option(&option.name) && !values.contains(&option.value) {
                values.push(option.value.clone());
            }
        }
    }
    values
}

/// The swatch image for a colour value: the image of the first variant sold
/// in that colour, if it has one.
#[must_use]
pub fn image_for_color<'a>(product: &'a Product, color: &str) -> Option<&'a ProductImage> {
    product
        .variants
        .iter()
        .find(|variant| {
            variant
                .selected_options
                .iter()
                .any(|option| is_color_option(&option.name) && option.value == color)
        })
        .and_then(|variant| variant.image.as_ref())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shopify::types::{
        Money, PriceRange, ProductOption, SelectedOption,
    };

    fn money(amount: &str) -> Money {
        Money {
            amount: amount.to_string(),
            currency_code: "USD".to_string(),
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
            price: money("49.0"),
            compare_at_price: None,
            selected_options: options
                .iter()
                .map(|(name, value)| SelectedOption {
                    name: (*name).to_string(),
                    value: (*value).to_string(),
                })
                .collect(),
            image: image_url.map(|url| ProductImage {
                id: None,
                url: url.to_string(),
                alt: None,
                width: None,
                height: None,
            }),
        }
    }

    fn color_size_product() -> Product {
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
            featured_image: None,
            images: vec![],
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

    fn selection(pairs: &[(&str, &str)]) -> SelectionMap {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_default_selection_takes_first_values() {
        let product = color_size_product();
        let defaults = default_selection(&product);

        assert_eq!(defaults.get("Color").unwrap(), "Red");
        assert_eq!(defaults.get("Size").unwrap(), "S");
    }

    #[test]
    fn test_resolve_variant_exact_match() {
        let product = color_size_product();
        let chosen = selection(&[("Color", "Blue"), ("Size", "M")]);

        let resolved = resolve_variant(&product, &chosen).unwrap();
        assert_eq!(resolved.id, "v4");
    }

    #[test]
    fn test_resolve_variant_requires_full_match() {
        let mut product = color_size_product();
        product.variants = vec![variant(
            "v1",
            &[("Color", "Red"), ("Size", "S"), ("Fit", "Slim")],
            None,
        )];

        // Two of three options agreeing is not a match.
        let chosen = selection(&[("Color", "Red"), ("Size", "S"), ("Fit", "Relaxed")]);
        assert!(resolve_variant(&product, &chosen).is_none());
    }

    #[test]
    fn test_resolve_variant_unknown_combination() {
        let product = color_size_product();
        let chosen = selection(&[("Color", "Green"), ("Size", "M")]);

        assert!(resolve_variant(&product, &chosen).is_none());
    }

    #[test]
    fn test_resolve_variant_first_match_wins() {
        let mut product = color_size_product();
        // Two variants with identical selected options.
        product.variants = vec![
            variant("first", &[("Color", "Red")], None),
            variant("second", &[("Color", "Red")], None),
        ];

        let chosen = selection(&[("Color", "Red")]);
        assert_eq!(resolve_variant(&product, &chosen).unwrap().id, "first");
    }

    #[test]
    fn test_color_values_from_options() {
        let product = color_size_product();
        assert_eq!(color_values(&product), vec!["Red", "Blue"]);
    }

    #[test]
    fn test_color_values_falls_back_to_variants() {
        let mut product = color_size_product();
        product.options = vec![];

        assert_eq!(color_values(&product), vec!["Red", "Blue"]);
    }

    #[test]
    fn test_color_values_accepts_british_spelling() {
        let mut product = color_size_product();
        product.options = vec![ProductOption {
            id: None,
            name: "Shell Colour".to_string(),
            values: vec!["Olive".to_string()],
        }];

        assert_eq!(color_values(&product), vec!["Olive"]);
    }

    #[test]
    fn test_image_for_color() {
        let product = color_size_product();

        let image = image_for_color(&product, "Blue").unwrap();
        assert_eq!(image.url, "blue.jpg");

        assert!(image_for_color(&product, "Green").is_none());
    }

    #[test]
    fn test_image_for_color_stops_at_first_colour_match() {
        let mut product = color_size_product();
        // First Red variant has no image; the lookup does not keep scanning.
        product.variants = vec![
            variant("v1", &[("Color", "Red")], None),
            variant("v2", &[("Color", "Red")], Some("red-later.jpg")),
        ];

        assert!(image_for_color(&product, "Red").is_none());
    }
}
