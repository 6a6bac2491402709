//! Main CLI parser and top-level argument handling.

use clap::Parser;
use ddevdesk_core::{DDEV_BIN_ENV, SHELL_ENV};

use crate::commands::Commands;

/// Command-line interface for driving DDEV projects without the desktop app.
///
/// Every subcommand prints the JSON response envelope on stdout.
#[derive(Parser)]
#[command(name = "ddevdesk")]
#[command(about = "List, inspect and control local DDEV projects")]
#[command(version)]
pub struct Cli {
    /// Path or name of the ddev binary
    #[arg(long = "ddev-bin", env = DDEV_BIN_ENV, global = true)]
    pub ddev_bin: Option<String>,

    /// Shell launcher wrapping every ddev invocation (e.g. "/bin/zsh -lc")
    #[arg(long = "shell", env = SHELL_ENV, global = true)]
    pub shell: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
