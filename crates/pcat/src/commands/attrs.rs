//! Attrs command implementation.
//!
//! Lists the filterable attributes of a product kind, or the attributes
//! common to every kind for the mixed view.

use partcat_cache::view::{attributes_for, KindSelector};

use super::{CommandContext, Result};
use crate::output::{format_attrs_json, format_attrs_table};

/// Executes the attrs command.
pub fn execute(ctx: &CommandContext, kind: KindSelector) -> Result<()> {
    let descriptors = attributes_for(kind);

    if ctx.json_output {
        println!("{}", format_attrs_json(&descriptors)?);
    } else if !ctx.quiet {
        print!("{}", format_attrs_table(&descriptors, ctx.use_colors));
    }

    Ok(())
}
