//! Refresh manager coupling the catalog client and local store.

use chrono::Utc;
use partcat_api::client::CatalogClient;
use partcat_api::models::ProductRecord;
use thiserror::Error;

use crate::store::{CatalogStore, CatalogStoreError};
use crate::Catalog;

/// How many candidate ids to list when a prefix lookup is ambiguous.
const MAX_AMBIGUOUS_CANDIDATES: usize = 5;

/// Errors that can occur during catalog refresh and lookups.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// API/client failure.
    #[error("API error: {0}")]
    Api(#[from] partcat_api::error::Error),

    /// Store failure.
    #[error("cache error: {0}")]
    Store(#[from] CatalogStoreError),

    /// A referenced product does not exist in the cached catalog.
    #[error("product '{identifier}' not found; run 'pcat refresh' to update the local catalog")]
    NotFound {
        /// The id or prefix that was looked up.
        identifier: String,
    },

    /// An id prefix matched more than one product.
    #[error("ambiguous product id '{identifier}', matching: {candidates}. Use a longer prefix")]
    Ambiguous {
        /// The ambiguous prefix.
        identifier: String,
        /// Comma-separated candidate ids (truncated).
        candidates: String,
    },
}

/// Result type for manager operations.
pub type RefreshResult<T> = Result<T, RefreshError>;

/// Couples the HTTP client with the local store and owns the in-memory
/// catalog between operations.
///
/// # Example
///
/// ```no_run
/// use partcat_api::client::CatalogClient;
/// use partcat_cache::{CatalogManager, CatalogStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CatalogClient::new("https://catalog.example.com")?;
/// let store = CatalogStore::new()?;
/// let mut manager = CatalogManager::new(client, store);
///
/// let fetched = manager.refresh().await?;
/// println!("cached {} products", fetched);
/// # Ok(())
/// # }
/// ```
pub struct CatalogManager {
    client: CatalogClient,
    store: CatalogStore,
    catalog: Catalog,
}

impl CatalogManager {
    /// Creates a manager, loading any existing catalog from disk.
    ///
    /// A missing or unreadable cache file starts the manager with an
    /// empty catalog rather than failing; the first `refresh()` will
    /// populate it.
    pub fn new(client: CatalogClient, store: CatalogStore) -> Self {
        let catalog = store.load().unwrap_or_default();
        Self {
            client,
            store,
            catalog,
        }
    }

    /// The current in-memory catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying store.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Replaces the local catalog with a full listing from the service
    /// and persists it. Returns the number of records fetched.
    ///
    /// The refresh is wholesale: the backing service offers no
    /// incremental mode, and the view engine recomputes from the full
    /// record set anyway.
    pub async fn refresh(&mut self) -> RefreshResult<usize> {
        let products = self.client.list_products(None).await?;
        let count = products.len();

        self.catalog = Catalog {
            refreshed_at: Some(Utc::now()),
            products,
        };
        self.store.save_async(&self.catalog).await?;

        Ok(count)
    }

    /// Resolves a product by exact id or unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when nothing matches and `Ambiguous` when the
    /// prefix matches more than one record.
    pub fn resolve_product(&self, id_or_prefix: &str) -> RefreshResult<&ProductRecord> {
        // Exact match takes precedence over prefix matches.
        if let Some(record) = self
            .catalog
            .products
            .iter()
            .find(|p| p.id() == id_or_prefix)
        {
            return Ok(record);
        }

        let matches: Vec<&ProductRecord> = self
            .catalog
            .products
            .iter()
            .filter(|p| p.id().starts_with(id_or_prefix))
            .collect();

        match matches.len() {
            0 => Err(RefreshError::NotFound {
                identifier: id_or_prefix.to_string(),
            }),
            1 => Ok(matches[0]),
            n => {
                let mut candidates: Vec<&str> = matches
                    .iter()
                    .take(MAX_AMBIGUOUS_CANDIDATES)
                    .map(|p| p.id())
                    .collect();
                if n > MAX_AMBIGUOUS_CANDIDATES {
                    candidates.push("...");
                }
                Err(RefreshError::Ambiguous {
                    identifier: id_or_prefix.to_string(),
                    candidates: candidates.join(", "),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partcat_api::models::ProductKind;
    use tempfile::TempDir;

    fn manager_with(products: Vec<ProductRecord>) -> (CatalogManager, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::with_path(dir.path().join("catalog.json"));
        let catalog = Catalog {
            refreshed_at: Some(Utc::now()),
            products,
        };
        store.save(&catalog).unwrap();

        let client = CatalogClient::new("http://localhost:0").unwrap();
        (CatalogManager::new(client, store), dir)
    }

    #[test]
    fn test_new_with_missing_cache_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::with_path(dir.path().join("catalog.json"));
        let client = CatalogClient::new("http://localhost:0").unwrap();

        let manager = CatalogManager::new(client, store);
        assert!(manager.catalog().is_empty());
    }

    #[test]
    fn test_resolve_exact_id() {
        let (manager, _dir) = manager_with(vec![
            ProductRecord::new("m-100", ProductKind::Motor),
            ProductRecord::new("m-1", ProductKind::Motor),
        ]);

        // "m-1" matches both as a prefix, but exactly as an id.
        let record = manager.resolve_product("m-1").unwrap();
        assert_eq!(record.id(), "m-1");
    }

    #[test]
    fn test_resolve_unique_prefix() {
        let (manager, _dir) = manager_with(vec![
            ProductRecord::new("m-100", ProductKind::Motor),
            ProductRecord::new("d-200", ProductKind::Drive),
        ]);

        let record = manager.resolve_product("d-").unwrap();
        assert_eq!(record.id(), "d-200");
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let (manager, _dir) = manager_with(vec![
            ProductRecord::new("m-100", ProductKind::Motor),
            ProductRecord::new("m-101", ProductKind::Motor),
        ]);

        let result = manager.resolve_product("m-10");
        match result {
            Err(RefreshError::Ambiguous { candidates, .. }) => {
                assert!(candidates.contains("m-100"));
                assert!(candidates.contains("m-101"));
            }
            other => panic!("expected Ambiguous, got {:?}", other.map(|r| r.id())),
        }
    }

    #[test]
    fn test_resolve_not_found() {
        let (manager, _dir) = manager_with(vec![ProductRecord::new("m-100", ProductKind::Motor)]);

        let result = manager.resolve_product("x-1");
        assert!(matches!(result, Err(RefreshError::NotFound { .. })));
    }
}
