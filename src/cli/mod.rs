//! CLI commands for precheck.

pub mod check;
pub mod hooks;
pub mod install;
pub mod output;

use clap::{Parser, Subcommand};

use crate::error::{Error, TOOL_ERROR_EXIT_CODE};

/// precheck - fail-fast pre-commit gate for Rust projects
#[derive(Parser)]
#[command(name = "precheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run cargo fmt and clippy checks (default)
    Run,

    /// Install the git pre-commit hook
    Install {
        /// Replace an existing pre-commit hook instead of appending to it
        #[arg(long, short)]
        force: bool,
    },

    /// Remove the git pre-commit hook
    Uninstall,
}

/// Process exit code for a command's result. Tool errors are reported on
/// stderr and map to [`TOOL_ERROR_EXIT_CODE`].
pub fn exit_code(result: Result<i32, Error>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("precheck: {}", e);
            TOOL_ERROR_EXIT_CODE
        }
    }
}
