//! Shared GUI backend facade for ddevdesk adapters.
//!
//! This crate provides `GuiBackend`, a platform-agnostic orchestration layer
//! that both the Tauri desktop app and the `ddevdesk` CLI delegate to. The
//! request table in [`dispatch`] is the single list of operations every
//! adapter exposes.
//!
//! # Architecture
//!
//! ```text
//! Adapters:     src-tauri        ddevdesk-cli
//!                    ↓                 ↓
//! Facade:            └── ddevdesk-gui ─┘
//!                        GuiBackend
//!                            ↓
//! Runtime:            ddevdesk-runtime
//!                            ↓
//! Core:                ddevdesk-core
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - Must not depend on tauri or clap
//! 2. **Pure orchestration** - All deps injected via `GuiDeps`
//! 3. **Never raise** - Every dispatched operation returns an `ApiResponse`

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

mod backend;
mod deps;
pub mod dispatch;
mod error;
mod logs;
mod projects;
pub mod types;

// Primary exports
pub use backend::GuiBackend;
pub use deps::GuiDeps;
pub use dispatch::Operation;
pub use error::GuiError;
pub use types::ApiResponse;

pub use logs::LogOps;
pub use projects::ProjectOps;

// Re-export commonly used types from ddevdesk-core for convenience
pub use ddevdesk_core::{LogEntry, LogEvent, LogKey, ToolConfig};
