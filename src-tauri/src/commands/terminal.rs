//! Captured output commands.
//!
//! A missing or empty `project` addresses the global log.

use ddevdesk_gui::Operation;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

/// `terminal:getOutput`
#[tauri::command]
pub async fn terminal_get_output(
    project: Option<String>,
    state: State<'_, AppState>,
) -> CommandResult {
    Ok(state
        .gui
        .dispatch(Operation::GetOutput, project.as_deref())
        .await)
}

/// `terminal:clearOutput`
#[tauri::command]
pub async fn terminal_clear_output(
    project: Option<String>,
    state: State<'_, AppState>,
) -> CommandResult {
    Ok(state
        .gui
        .dispatch(Operation::ClearOutput, project.as_deref())
        .await)
}
