use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::Dispatch;
use partcat_cache::RefreshError;

/// Default catalog service URL when neither flag, env, nor config set
/// one.
const DEFAULT_SERVER: &str = "http://localhost:8421";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);
    let server = resolve_server(cli);
    Dispatch::new(cli).execute(&ctx, &server).await
}

/// Resolves the catalog server URL with priority: flag > env > config >
/// default.
///
/// The `--server` flag and `PARTCAT_SERVER` env var share the first slot
/// (clap resolves the env var into the flag). A broken config file is
/// treated as absent here; `pcat config show` surfaces the parse error.
fn resolve_server(cli: &Cli) -> String {
    if let Some(server) = &cli.server {
        return server.clone();
    }

    if let Ok(config) = load_config() {
        if let Some(server) = config.server {
            return server;
        }
    }

    DEFAULT_SERVER.to_string()
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Refresh(_) => "REFRESH_ERROR",
        CommandError::CatalogStore(_) => "CACHE_ERROR",
        CommandError::Query(_) => "QUERY_ERROR",
        CommandError::Api(_) => "API_ERROR",
        CommandError::UnknownAttribute { .. } => "ATTRIBUTE_ERROR",
        CommandError::Usage(_) => "USAGE_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Query(_) => ExitCode::from(1),
        CommandError::UnknownAttribute { .. } => ExitCode::from(1),
        CommandError::Usage(_) => ExitCode::from(1),
        CommandError::Json(_) => ExitCode::from(1),
        CommandError::Api(_) => ExitCode::from(2),
        CommandError::Refresh(RefreshError::Api(_)) => ExitCode::from(2),
        CommandError::Refresh(_) => ExitCode::from(5),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::CatalogStore(_) => ExitCode::from(5),
        CommandError::Config(_) => ExitCode::from(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to create a test CLI with the given server flag.
    fn cli_with_server(server: Option<String>) -> Cli {
        Cli {
            json: false,
            no_color: false,
            quiet: false,
            verbose: false,
            server,
            refresh: false,
            command: None,
        }
    }

    #[test]
    #[serial]
    fn test_resolve_server_from_flag() {
        let cli = cli_with_server(Some("https://flag.example.com".to_string()));
        assert_eq!(resolve_server(&cli), "https://flag.example.com");
    }

    #[test]
    #[serial]
    fn test_resolve_server_default_when_unset() {
        let original = env::var("PCAT_CONFIG").ok();
        env::set_var("PCAT_CONFIG", "/tmp/pcat-test-nonexistent/config.toml");

        let cli = cli_with_server(None);
        let server = resolve_server(&cli);

        match original {
            Some(val) => env::set_var("PCAT_CONFIG", val),
            None => env::remove_var("PCAT_CONFIG"),
        }

        assert_eq!(server, DEFAULT_SERVER);
    }

    #[test]
    #[serial]
    fn test_resolve_server_from_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "server = \"https://config.example.com\"\n").unwrap();

        let original = env::var("PCAT_CONFIG").ok();
        env::set_var("PCAT_CONFIG", config_path.to_str().unwrap());

        let cli = cli_with_server(None);
        let server = resolve_server(&cli);

        match original {
            Some(val) => env::set_var("PCAT_CONFIG", val),
            None => env::remove_var("PCAT_CONFIG"),
        }

        assert_eq!(server, "https://config.example.com");
    }

    #[test]
    #[serial]
    fn test_resolve_server_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "server = \"https://config.example.com\"\n").unwrap();

        let original = env::var("PCAT_CONFIG").ok();
        env::set_var("PCAT_CONFIG", config_path.to_str().unwrap());

        let cli = cli_with_server(Some("https://flag.example.com".to_string()));
        let server = resolve_server(&cli);

        match original {
            Some(val) => env::set_var("PCAT_CONFIG", val),
            None => env::remove_var("PCAT_CONFIG"),
        }

        assert_eq!(server, "https://flag.example.com");
    }
}
