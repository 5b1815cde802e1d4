//! Local cache for catalog data.
//!
//! This crate holds a local mirror of the catalog service's product listing,
//! enabling offline browsing, plus the view engine that turns the cached
//! record set into filtered, sorted views (see the [`view`] module).

use chrono::{DateTime, Utc};
use partcat_api::models::{ProductKind, ProductRecord};
use serde::{Deserialize, Serialize};

pub mod manager;
pub mod store;
pub mod view;

pub use manager::{CatalogManager, RefreshError, RefreshResult};
pub use store::{CatalogStore, CatalogStoreError};

/// Local cache of the catalog service's product listing.
///
/// The structure mirrors the listing endpoint's response for easy wholesale
/// replacement on refresh; the backing service offers no incremental mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// UTC timestamp of the last successful refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refreshed_at: Option<DateTime<Utc>>,

    /// Cached product records, in service order.
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates a new empty catalog that has never been refreshed.
    pub fn new() -> Self {
        Self {
            refreshed_at: None,
            products: Vec::new(),
        }
    }

    /// Returns true if the catalog has never been refreshed.
    pub fn is_empty(&self) -> bool {
        self.refreshed_at.is_none()
    }

    /// Returns the records of one kind, in cached order.
    pub fn products_of_kind(&self, kind: ProductKind) -> Vec<&ProductRecord> {
        self.products.iter().filter(|p| p.kind == kind).collect()
    }
}
