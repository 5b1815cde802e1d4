//! Refresh command implementation.
//!
//! Replaces the local catalog with a full listing from the service.

use partcat_api::client::CatalogClient;
use partcat_cache::{CatalogManager, CatalogStore};

use super::{CommandContext, Result};

/// Executes the refresh command.
pub async fn execute(ctx: &CommandContext, server: &str) -> Result<()> {
    let client = CatalogClient::new(server)?;
    let store = CatalogStore::new()?;
    let mut manager = CatalogManager::new(client, store);

    if ctx.verbose {
        eprintln!("Fetching catalog from {server}...");
    }
    let count = manager.refresh().await?;

    if ctx.json_output {
        let output = serde_json::json!({
            "refreshed": count,
            "refreshed_at": manager.catalog().refreshed_at,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Refreshed {count} products from {server}.");
    }

    Ok(())
}
