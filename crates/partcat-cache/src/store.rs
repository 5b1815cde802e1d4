//! Catalog file storage with XDG path support.
//!
//! This module provides persistent storage for the local catalog using
//! XDG-compliant paths. The catalog is stored as JSON at
//! `~/.cache/pcat/catalog.json`.
//!
//! Both synchronous and asynchronous I/O methods are provided:
//! - `save()`, `load()` - Synchronous methods using `std::fs`
//! - `save_async()`, `load_async()` - Asynchronous methods using `tokio::fs`
//!
//! The async methods are recommended in async contexts (like
//! `CatalogManager::refresh()`) to avoid blocking the tokio runtime.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::Catalog;

/// Default catalog filename.
const CATALOG_FILENAME: &str = "catalog.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "pcat";

/// Errors that can occur during catalog storage operations.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// Failed to determine XDG cache directory.
    #[error("failed to determine cache directory: no valid home directory found")]
    NoCacheDir,

    /// I/O error during file read.
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write catalog file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create cache directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog store operations.
pub type Result<T> = std::result::Result<T, CatalogStoreError>;

/// Persistent storage for the local catalog.
///
/// `CatalogStore` handles reading and writing the catalog to disk using
/// XDG-compliant paths. On Unix systems, the file lives at
/// `~/.cache/pcat/catalog.json`.
///
/// # Example
///
/// ```no_run
/// use partcat_cache::{Catalog, CatalogStore};
///
/// let store = CatalogStore::new()?;
///
/// // Load existing catalog or start empty
/// let catalog = store.load().unwrap_or_default();
///
/// // Save catalog to disk
/// store.save(&catalog)?;
/// # Ok::<(), partcat_cache::CatalogStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Path to the catalog file.
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a new `CatalogStore` with the default XDG cache path.
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoCacheDir` if the home directory cannot
    /// be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `CatalogStore` with a custom path.
    ///
    /// This is primarily useful for testing.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path to the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Computes the default XDG cache path for the catalog file.
    fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CatalogStoreError::NoCacheDir)?;
        Ok(dirs.cache_dir().join(CATALOG_FILENAME))
    }

    /// Loads the catalog from disk.
    ///
    /// # Errors
    ///
    /// Returns `ReadError` if the file cannot be read (including when it
    /// does not exist) and `Json` if the contents are not a valid catalog.
    pub fn load(&self) -> Result<Catalog> {
        let contents = fs::read_to_string(&self.path).map_err(|source| {
            CatalogStoreError::ReadError {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves the catalog to disk, creating parent directories as needed.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        self.ensure_parent_dir()?;

        let contents = serde_json::to_string_pretty(catalog)?;
        fs::write(&self.path, contents).map_err(|source| CatalogStoreError::WriteError {
            path: self.path.clone(),
            source,
        })
    }

    /// Loads the catalog from disk without blocking the async runtime.
    pub async fn load_async(&self) -> Result<Catalog> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            CatalogStoreError::ReadError {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves the catalog to disk without blocking the async runtime.
    pub async fn save_async(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|source| {
                CatalogStoreError::CreateDirError {
                    path: parent.to_path_buf(),
                    source,
                }
            })?;
        }

        let contents = serde_json::to_string_pretty(catalog)?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|source| CatalogStoreError::WriteError {
                path: self.path.clone(),
                source,
            })
    }

    /// Creates the parent directory of the catalog file if missing.
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CatalogStoreError::CreateDirError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partcat_api::models::{ProductKind, ProductRecord};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CatalogStore {
        CatalogStore::with_path(dir.path().join("nested").join(CATALOG_FILENAME))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut catalog = Catalog::new();
        catalog
            .products
            .push(ProductRecord::new("m-1", ProductKind::Motor).with("manufacturer", "ACME"));

        store.save(&catalog).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(catalog, loaded);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let result = store.load();
        assert!(matches!(result, Err(CatalogStoreError::ReadError { .. })));
    }

    #[test]
    fn test_load_invalid_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CATALOG_FILENAME);
        fs::write(&path, "not json").unwrap();

        let store = CatalogStore::with_path(path);
        let result = store.load();
        assert!(matches!(result, Err(CatalogStoreError::Json(_))));
    }

    #[tokio::test]
    async fn test_async_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut catalog = Catalog::new();
        catalog
            .products
            .push(ProductRecord::new("g-1", ProductKind::Gearhead));

        store.save_async(&catalog).await.unwrap();
        let loaded = store.load_async().await.unwrap();
        assert_eq!(catalog, loaded);
    }
}
