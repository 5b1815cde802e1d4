//! Output formatting for the pcat CLI.
//!
//! Each submodule formats one family of results as either a
//! human-readable table (with optional colors) or JSON.

mod attrs;
mod helpers;
mod products;

pub use attrs::{format_attrs_json, format_attrs_table};
pub use products::{
    format_product_details_json, format_product_details_table, format_products_json,
    format_products_table,
};
