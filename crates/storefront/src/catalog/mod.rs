//! Product catalog view logic.
//!
//! Pure selection and stock rules shared by the HTTP surface and the CLI:
//! option-to-variant resolution, colour swatch lookup, availability, and
//! the product detail page state built on top of them.

pub mod availability;
pub mod page;
pub mod resolver;

pub use availability::{is_available, stock_badge, stock_label};
pub use page::ProductPage;
pub use resolver::{
    SelectionMap, color_values, default_selection, image_for_color, resolve_variant,
};
