//! Kinds command implementation.
//!
//! Lists the known product kinds with cached record counts.

use owo_colors::OwoColorize;
use partcat_api::models::ProductKind;
use partcat_cache::CatalogStore;
use serde::Serialize;

use super::{CommandContext, Result};

/// JSON output row for one kind.
#[derive(Serialize)]
struct KindOutput {
    kind: &'static str,
    label: &'static str,
    count: usize,
}

/// Executes the kinds command. A missing local catalog simply counts
/// every kind as zero.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let store = CatalogStore::new()?;
    let catalog = store.load().unwrap_or_default();

    let rows: Vec<KindOutput> = ProductKind::CONCRETE
        .iter()
        .map(|kind| KindOutput {
            kind: kind.as_str(),
            label: kind.label(),
            count: catalog.products.iter().filter(|p| p.kind == *kind).count(),
        })
        .collect();

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if ctx.quiet {
        return Ok(());
    }

    let header = format!("{:<12} {:<12} {:>6}", "KIND", "LABEL", "COUNT");
    if ctx.use_colors {
        println!("{}", header.dimmed());
    } else {
        println!("{header}");
    }
    for row in &rows {
        println!("{:<12} {:<12} {:>6}", row.kind, row.label, row.count);
    }
    if let Some(refreshed_at) = &catalog.refreshed_at {
        println!("Last refreshed: {refreshed_at}");
    } else {
        println!("Local catalog is empty; run 'pcat refresh' to populate it.");
    }

    Ok(())
}
