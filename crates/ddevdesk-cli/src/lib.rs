//! Command-line adapter for ddevdesk.
//!
//! Maps subcommands onto the `ddevdesk-gui` request table, so the CLI and the
//! desktop app expose the same operations with the same envelopes.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary's entry point
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{bootstrap, tool_config};
pub use commands::Commands;
pub use parser::Cli;
