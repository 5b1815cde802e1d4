//! Filter, sort, and attribute-metadata engine for catalog views.
//!
//! This module turns a heterogeneous product record set into a filtered,
//! multi-level-sorted view, driven by per-kind attribute schemas. It is
//! pure and synchronous: every function is a deterministic transformation
//! of its inputs, holds no state across calls, and never mutates the
//! record set it is given.
//!
//! # Pipeline
//!
//! Raw record set -> [`apply_filters`] (value extraction + criterion
//! evaluation) -> [`sort_products`] (value extraction + natural
//! comparison) -> pagination slice, which is the caller's job.
//!
//! # Example
//!
//! ```
//! use partcat_api::models::{ProductKind, ProductRecord, Quantity};
//! use partcat_cache::view::{
//!     apply_filters, sort_products, FilterCriterion, SortDirection, SortLevel,
//! };
//!
//! let records = vec![
//!     ProductRecord::new("m-1", ProductKind::Motor)
//!         .with("manufacturer", "ACME")
//!         .with("rated_power", Quantity::new(100.0, "W")),
//!     ProductRecord::new("m-2", ProductKind::Motor)
//!         .with("manufacturer", "Beta Corp")
//!         .with("rated_power", Quantity::new(200.0, "W")),
//! ];
//! let refs: Vec<&ProductRecord> = records.iter().collect();
//!
//! let criteria = vec![FilterCriterion::include("manufacturer", "acme")];
//! let surviving = apply_filters(&refs, &criteria);
//! assert_eq!(surviving.len(), 1);
//!
//! let levels = vec![SortLevel::new("rated_power", SortDirection::Desc)];
//! let sorted = sort_products(&refs, &levels);
//! assert_eq!(sorted[0].id(), "m-2");
//! ```

mod criteria;
mod error;
mod evaluate;
mod extract;
mod filter;
mod natural;
mod query;
mod schema;
mod sort;

pub use criteria::{
    CompareOp, CriterionValue, FilterCriterion, FilterMode, SortDirection, SortLevel,
};
pub use error::{QueryError, QueryResult};
pub use evaluate::matches;
pub use extract::{extract, numeric_value};
pub use filter::apply_filters;
pub use natural::compare_natural;
pub use query::{parse_criterion, parse_sort_level};
pub use schema::{
    attributes_for, find_attribute, suggest_attribute, AttrDescriptor, AttrShape, KindSelector,
};
pub use sort::sort_products;

#[cfg(test)]
mod tests;
