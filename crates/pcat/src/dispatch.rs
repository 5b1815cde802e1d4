//! Command dispatch: maps parsed CLI commands onto command handlers.

use crate::cli::{Cli, Commands};
use crate::commands::{self, CommandContext, Result};

/// Dispatches the selected command. A bare `pcat` runs `list` with
/// default options.
pub struct Dispatch<'a> {
    cli: &'a Cli,
}

impl<'a> Dispatch<'a> {
    /// Creates a dispatcher over the parsed CLI.
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Runs the selected command.
    pub async fn execute(&self, ctx: &CommandContext, server: &str) -> Result<()> {
        match &self.cli.command {
            None => {
                let opts = commands::list::ListOptions::default();
                commands::list::execute(ctx, &opts, server).await
            }

            Some(Commands::List {
                kind,
                include,
                exclude,
                sort,
                limit,
                offset,
                all,
            }) => {
                let opts = commands::list::ListOptions {
                    kind: kind.to_selector(),
                    include: include.clone(),
                    exclude: exclude.clone(),
                    sort: sort.clone(),
                    limit: *limit,
                    offset: *offset,
                    all: *all,
                };
                commands::list::execute(ctx, &opts, server).await
            }

            Some(Commands::Show { id }) => commands::show::execute(ctx, id, server).await,

            Some(Commands::Attrs { kind }) => commands::attrs::execute(ctx, kind.to_selector()),

            Some(Commands::Kinds) => commands::kinds::execute(ctx),

            Some(Commands::Refresh) => commands::refresh::execute(ctx, server).await,

            Some(Commands::Config { command }) => {
                commands::config::execute(ctx, command.as_ref()).await
            }

            Some(Commands::Completions { shell }) => commands::completions::execute(*shell),
        }
    }
}
