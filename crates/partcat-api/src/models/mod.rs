//! Data models for catalog records.
//!
//! Records are semi-structured: a typed entity-kind discriminant plus a
//! loosely-typed attribute map whose values come from a small closed set of
//! shapes (see [`AttrValue`]).

mod record;
mod value;

pub use record::{ProductKind, ProductRecord};
pub use value::{format_number, AttrValue, Quantity, QuantityRange};
