//! Command implementations for the pcat CLI.
//!
//! This module contains the actual command handlers that are invoked by
//! the CLI dispatch.

pub mod attrs;
pub mod completions;
pub mod config;
pub mod kinds;
pub mod list;
pub mod refresh;
pub mod show;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Refresh/lookup error from the cache layer.
    #[error("{0}")]
    Refresh(#[from] partcat_cache::RefreshError),

    /// Catalog store error.
    #[error("cache error: {0}")]
    CatalogStore(#[from] partcat_cache::CatalogStoreError),

    /// Criterion or sort-spec parsing error.
    #[error("query error: {0}")]
    Query(#[from] partcat_cache::view::QueryError),

    /// API error.
    #[error("API error: {0}")]
    Api(#[from] partcat_api::error::Error),

    /// A filter or sort referenced an attribute absent from the catalog.
    #[error("{message}")]
    UnknownAttribute {
        /// The full message, including any "did you mean" hint.
        message: String,
    },

    /// Invalid command-line usage.
    #[error("{0}")]
    Usage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Builds the unknown-attribute error, with a "did you mean" hint
    /// when a close key exists.
    pub fn unknown_attribute(attribute: &str, suggestion: Option<String>) -> Self {
        let message = match suggestion {
            Some(s) => format!("unknown attribute '{attribute}'. Did you mean '{s}'?"),
            None => format!("unknown attribute '{attribute}'"),
        };
        CommandError::UnknownAttribute { message }
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common settings.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Whether to refresh from the service before reading the cache.
    pub refresh_first: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
            quiet: cli.quiet,
            verbose: cli.verbose,
            refresh_first: cli.refresh,
        }
    }
}
