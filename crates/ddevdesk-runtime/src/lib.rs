//! Process runtime and OS-level concerns for ddevdesk.
//!
//! This crate implements the core ports against the real operating system:
//!
//! - [`TokioSpawner`] - `tokio::process` implementation of `ProcessSpawner`
//! - [`ProjectLogManager`] - per-key in-memory log with live broadcast
//! - [`CommandExecutor`] - spawn, capture lines, resolve outcome
//! - [`DdevCli`] - `DdevToolPort` over the `ddev` binary
//! - [`SystemUrlOpener`] - `UrlOpenerPort` over the platform handler

#![deny(unsafe_code)]

pub mod ddev;
mod executor;
mod opener;
pub mod process;

pub use ddev::DdevCli;
pub use executor::CommandExecutor;
pub use opener::{SystemUrlOpener, validate_external_url};
pub use process::{ProjectLogManager, TokioSpawner};
