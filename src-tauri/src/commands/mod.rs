//! Tauri command handlers.
//!
//! One command per row of the request table; each returns the
//! `{success, data?, error?}` envelope produced by `GuiBackend::dispatch`.

pub mod ddev;
pub mod shell;
pub mod terminal;

use ddevdesk_gui::ApiResponse;
use serde_json::Value;

/// Async commands that borrow `State` must return a `Result`; the envelope
/// itself carries failures, so the error side is never used.
pub type CommandResult = Result<ApiResponse<Value>, String>;
