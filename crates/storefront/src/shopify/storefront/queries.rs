//! GraphQL documents for the Storefront API.
//!
//! Documents are hand-written and posted as `{query, variables}`; the typed
//! response shapes live in [`super::wire`]. Anything spliced into a document
//! (the featured-product aliases) goes through [`rootwear_core::Handle`]
//! first, which restricts the alphabet to lowercase alphanumerics and
//! hyphens.

use rootwear_core::Handle;

/// Paginated product listing. Variables: `first: Int!`.
pub const PRODUCTS_QUERY: &str = r"
query getProducts($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        handle
        description
        createdAt
        updatedAt
        availableForSale
        totalInventory
        productType
        vendor
        tags
        options {
          id
          name
          values
        }
        featuredImage {
          id
          url
          altText
          width
          height
        }
        images(first: 10) {
          edges {
            node {
              id
              url
              altText
              width
              height
            }
          }
        }
        variants(first: 100) {
          edges {
            node {
              id
              title
              availableForSale
              quantityAvailable
              price {
                amount
                currencyCode
              }
              compareAtPrice {
                amount
                currencyCode
              }
              selectedOptions {
                name
                value
              }
              image {
                id
                url
                altText
                width
                height
              }
            }
          }
        }
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
          maxVariantPrice {
            amount
            currencyCode
          }
        }
      }
    }
  }
}
";

/// Full product graph for one handle. Variables: `handle: String!`.
pub const PRODUCT_BY_HANDLE_QUERY: &str = r"
query getProductByHandle($handle: String!) {
  product(handle: $handle) {
    id
    title
    handle
    description
    createdAt
    updatedAt
    availableForSale
    totalInventory
    productType
    vendor
    tags
    options {
      id
      name
      values
    }
    featuredImage {
      id
      url
      altText
      width
      height
    }
    images(first: 20) {
      edges {
        node {
          id
          url
          altText
          width
          height
        }
      }
    }
    variants(first: 100) {
      edges {
        node {
          id
          title
          availableForSale
          quantityAvailable
          price {
            amount
            currencyCode
          }
          compareAtPrice {
            amount
            currencyCode
          }
          selectedOptions {
            name
            value
          }
          image {
            id
            url
            altText
            width
            height
          }
        }
      }
    }
    priceRange {
      minVariantPrice {
        amount
        currencyCode
      }
      maxVariantPrice {
        amount
        currencyCode
      }
    }
  }
}
";

/// Cart creation handing line items to hosted checkout.
/// Variables: `input: CartInput!`.
pub const CART_CREATE_MUTATION: &str = r"
mutation cartCreate($input: CartInput!) {
  cartCreate(input: $input) {
    cart {
      id
      checkoutUrl
      totalTax {
        amount
        currencyCode
      }
      cost {
        subtotalAmount {
          amount
          currencyCode
        }
        totalAmount {
          amount
          currencyCode
        }
      }
      lines(first: 250) {
        edges {
          node {
            id
            quantity
            merchandise {
              ... on ProductVariant {
                id
                title
                image {
                  url
                  altText
                }
                price {
                  amount
                  currencyCode
                }
                product {
                  title
                }
              }
            }
          }
        }
      }
    }
    userErrors {
      field
      message
    }
  }
}
";

/// Selections requested per featured product.
///
/// Narrower than the listing query: featured cards do not need vendor or
/// timestamp metadata, and only the minimum variant price is shown.
const FEATURED_PRODUCT_FIELDS: &str = r"
    id
    title
    handle
    description
    availableForSale
    totalInventory
    options {
      id
      name
      values
    }
    featuredImage {
      id
      url
      altText
      width
      height
    }
    images(first: 10) {
      edges {
        node {
          id
          url
          altText
          width
          height
        }
      }
    }
    priceRange {
      minVariantPrice {
        amount
        currencyCode
      }
    }
    variants(first: 100) {
      edges {
        node {
          id
          title
          availableForSale
          quantityAvailable
          price {
            amount
            currencyCode
          }
          selectedOptions {
            name
            value
          }
          image {
            id
            url
            altText
            width
            height
          }
        }
      }
    }";

/// GraphQL alias for one featured handle, e.g.
/// `hack-hoodie` becomes `product_hack_hoodie`.
#[must_use]
pub fn handle_alias(handle: &Handle) -> String {
    format!("product_{}", handle.as_str().replace('-', "_"))
}

/// Build a single document fetching every featured handle as its own
/// aliased `product` field.
#[must_use]
pub fn featured_products_query(handles: &[Handle]) -> String {
    let fields = handles
        .iter()
        .map(|handle| {
            format!(
                "  {alias}: product(handle: \"{handle}\") {{{FEATURED_PRODUCT_FIELDS}\n  }}",
                alias = handle_alias(handle)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("query getFeaturedProducts {{\n{fields}\n}}")
}
