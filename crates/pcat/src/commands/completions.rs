//! Completions command implementation.
//!
//! Generates shell completion scripts for the pcat binary.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use super::Result;
use crate::cli::Cli;

/// Prints completions for the given shell to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::generate as generate_into;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate_into(Shell::Bash, &mut cmd, "pcat", &mut buf);
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains("pcat"));
        assert!(script.contains("refresh"));
        assert!(script.contains("attrs"));
    }
}
