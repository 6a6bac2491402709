//! Centralized event emission for Tauri.

use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tracing::error;

/// Event name constants.
///
/// Keep strings stable to avoid frontend breakage.
pub mod names {
    /// One captured output line, payload `{key, entry: {timestamp, message}}`.
    pub const TERMINAL_OUTPUT: &str = "terminal-output";
}

/// Emit an event to the frontend, logging any errors.
///
/// ```ignore
/// emit_or_log(&app, names::TERMINAL_OUTPUT, &event);
/// ```
pub fn emit_or_log<T: Serialize + Clone>(app: &AppHandle, event: &str, payload: T) {
    if let Err(e) = app.emit(event, payload) {
        error!(error = %e, event, "Failed to emit event");
    }
}
