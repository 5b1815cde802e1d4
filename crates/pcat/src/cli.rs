//! Command-line interface definition.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use partcat_api::models::ProductKind;
use partcat_cache::view::KindSelector;

/// Browse an electromechanical parts catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pcat", version, about = "Browse the parts catalog")]
pub struct Cli {
    /// Output JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Errors only.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose diagnostics on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog service URL (overrides the config file).
    #[arg(long, global = true, env = "PARTCAT_SERVER")]
    pub server: Option<String>,

    /// Refresh from the service before reading the local catalog.
    #[arg(long, global = true)]
    pub refresh: bool,

    /// Subcommand to run; defaults to `list`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List catalog products with filters and sorting.
    List {
        /// Product kind to list.
        #[arg(short, long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,

        /// Include criterion, e.g. 'manufacturer=acme' or
        /// 'rated_power>150' (repeatable).
        #[arg(short = 'w', long = "where", value_name = "CRITERION")]
        include: Vec<String>,

        /// Exclude criterion with the same syntax (repeatable).
        #[arg(short = 'x', long = "exclude", value_name = "CRITERION")]
        exclude: Vec<String>,

        /// Sort level, e.g. 'rated_power:desc' (repeatable, max 3,
        /// major to minor).
        #[arg(short, long, value_name = "LEVEL")]
        sort: Vec<String>,

        /// Maximum number of rows.
        #[arg(short, long, default_value_t = 50)]
        limit: u32,

        /// Number of rows to skip before the first shown.
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Show all rows (no limit).
        #[arg(short, long)]
        all: bool,
    },

    /// Show one product in full.
    Show {
        /// Product id or unique id prefix.
        id: String,
    },

    /// List the filterable attributes of a kind.
    Attrs {
        /// Product kind, or `all` for the attributes common to every
        /// kind.
        #[arg(short, long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,
    },

    /// List known product kinds with cached record counts.
    Kinds,

    /// Fetch the full catalog from the service into the local cache.
    Refresh,

    /// View and manage configuration.
    Config {
        /// Config subcommand; defaults to `show`.
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration.
    Show,
    /// Print the config file path.
    Path,
    /// Create a default config file if none exists.
    Init,
    /// Open the config file in $EDITOR.
    Edit,
}

/// Product kind selection for `list` and `attrs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// All kinds (the mixed view).
    All,
    /// Motors.
    Motor,
    /// Drives.
    Drive,
    /// Robot arms.
    RobotArm,
    /// Gearheads.
    Gearhead,
    /// Datasheets.
    Datasheet,
}

impl KindArg {
    /// Maps the CLI argument onto the view engine's kind selector.
    pub fn to_selector(self) -> KindSelector {
        match self {
            KindArg::All => KindSelector::All,
            KindArg::Motor => KindSelector::Only(ProductKind::Motor),
            KindArg::Drive => KindSelector::Only(ProductKind::Drive),
            KindArg::RobotArm => KindSelector::Only(ProductKind::RobotArm),
            KindArg::Gearhead => KindSelector::Only(ProductKind::Gearhead),
            KindArg::Datasheet => KindSelector::Only(ProductKind::Datasheet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_kind_arg_maps_to_selector() {
        assert_eq!(KindArg::All.to_selector(), KindSelector::All);
        assert_eq!(
            KindArg::RobotArm.to_selector(),
            KindSelector::Only(ProductKind::RobotArm)
        );
    }

    #[test]
    fn test_parse_list_with_criteria() {
        let cli = Cli::parse_from([
            "pcat",
            "list",
            "--kind",
            "motor",
            "--where",
            "manufacturer=acme",
            "--sort",
            "rated_power:desc",
        ]);

        match cli.command {
            Some(Commands::List {
                kind,
                include,
                sort,
                ..
            }) => {
                assert_eq!(kind, KindArg::Motor);
                assert_eq!(include, vec!["manufacturer=acme"]);
                assert_eq!(sort, vec!["rated_power:desc"]);
            }
            other => panic!("expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_robot_arm_kind_kebab_case() {
        let cli = Cli::parse_from(["pcat", "attrs", "--kind", "robot-arm"]);
        match cli.command {
            Some(Commands::Attrs { kind }) => assert_eq!(kind, KindArg::RobotArm),
            other => panic!("expected attrs command, got {:?}", other),
        }
    }
}
