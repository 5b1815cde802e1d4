//! Convenient re-exports of the most commonly used types.
//!
//! ```
//! use partcat_api::prelude::*;
//!
//! let record = ProductRecord::new("m-100", ProductKind::Motor)
//!     .with("manufacturer", "ACME")
//!     .with("rated_power", Quantity::new(100.0, "W"));
//! assert_eq!(record.id(), "m-100");
//! ```

pub use crate::client::CatalogClient;
pub use crate::error::{ApiError, Error, Result};
pub use crate::models::{AttrValue, ProductKind, ProductRecord, Quantity, QuantityRange};
