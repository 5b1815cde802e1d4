//! Catalog service client library
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use partcat_api::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`CatalogClient`],
//! error types, and the record models.
//!
//! [`CatalogClient`]: client::CatalogClient

pub mod client;
pub mod error;
pub mod models;
pub mod prelude;
mod retry;
