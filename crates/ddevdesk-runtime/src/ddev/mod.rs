//! `ddev` command-line adapter.
//!
//! - `client` - builds tool commands and implements `DdevToolPort`
//! - `parse` - unwraps the JSON envelope printed by `--json-output`

mod client;
mod parse;

pub use client::{DdevCli, JSON_OUTPUT_FLAG};
pub use parse::{parse_describe_output, parse_list_output};
