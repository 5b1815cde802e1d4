//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/pcat/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tokio::process::Command;

use super::{CommandContext, CommandError, Result};
use crate::cli::ConfigCommands;

/// Current config file version. Increment when making breaking changes
/// to the schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# pcat - Parts catalog CLI configuration

# Config schema version (do not modify)
version = 1

# Catalog service URL (can also use the PARTCAT_SERVER env var)
# server = "http://localhost:8421"

# Output preferences
[output]
# color = true   # Enable colors (respects NO_COLOR)
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to the current version when not present in the file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Catalog service URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Returns the config file path, honoring the `PCAT_CONFIG` override.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("PCAT_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let base = BaseDirs::new()
        .ok_or_else(|| CommandError::Config("could not determine home directory".to_string()))?;
    Ok(base.config_dir().join("pcat").join("config.toml"))
}

/// Loads the config file, falling back to defaults when it is missing.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| CommandError::Config(format!("invalid config file: {e}")))
}

/// Executes the config command. No subcommand means `show`.
pub async fn execute(ctx: &CommandContext, command: Option<&ConfigCommands>) -> Result<()> {
    match command {
        None | Some(ConfigCommands::Show) => show(ctx),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        Some(ConfigCommands::Init) => init(ctx),
        Some(ConfigCommands::Edit) => edit(ctx).await,
    }
}

/// Prints the resolved configuration.
fn show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if ctx.quiet {
        return Ok(());
    }

    println!("Config file: {}", config_path()?.display());
    match &config.server {
        Some(server) => println!("server = {server}"),
        None => println!("server = (unset, using default)"),
    }
    if let Some(color) = config.output.color {
        println!("output.color = {color}");
    }
    Ok(())
}

/// Creates a default config file if none exists.
fn init(ctx: &CommandContext) -> Result<()> {
    let path = config_path()?;
    if path.exists() {
        return Err(CommandError::Config(format!(
            "config file already exists at {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, DEFAULT_CONFIG)?;

    if !ctx.quiet {
        println!("Created {}", path.display());
    }
    Ok(())
}

/// Opens the config file in $EDITOR, creating a default file first if
/// needed.
async fn edit(ctx: &CommandContext) -> Result<()> {
    let path = config_path()?;
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_CONFIG)?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    if ctx.verbose {
        eprintln!("Opening {} with {editor}...", path.display());
    }

    let status = Command::new(&editor).arg(&path).status().await?;
    if !status.success() {
        return Err(CommandError::Config(format!(
            "editor '{editor}' exited with {status}"
        )));
    }
    Ok(())
}
