//! Show command implementation.
//!
//! Displays a single product in full, resolved by id or unique id prefix.

use partcat_api::client::CatalogClient;
use partcat_cache::{CatalogManager, CatalogStore};

use super::{CommandContext, Result};
use crate::output::{format_product_details_json, format_product_details_table};

/// Executes the show command.
///
/// # Errors
///
/// Returns an error when the id matches nothing or is an ambiguous
/// prefix.
pub async fn execute(ctx: &CommandContext, id: &str, server: &str) -> Result<()> {
    let client = CatalogClient::new(server)?;
    let store = CatalogStore::new()?;
    let mut manager = CatalogManager::new(client, store);

    if ctx.refresh_first {
        if ctx.verbose {
            eprintln!("Refreshing catalog from {server}...");
        }
        manager.refresh().await?;
    }

    let record = manager.resolve_product(id)?;

    if ctx.json_output {
        println!("{}", format_product_details_json(record)?);
    } else if !ctx.quiet {
        print!("{}", format_product_details_table(record, ctx.use_colors));
    }

    Ok(())
}
