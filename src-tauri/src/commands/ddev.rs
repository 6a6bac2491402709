//! Project commands backed by the `ddev` tool.

use ddevdesk_gui::Operation;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

/// `ddev:list`
#[tauri::command]
pub async fn ddev_list(state: State<'_, AppState>) -> CommandResult {
    Ok(state.gui.dispatch(Operation::List, None).await)
}

/// `ddev:describe`
#[tauri::command]
pub async fn ddev_describe(project: String, state: State<'_, AppState>) -> CommandResult {
    Ok(state.gui.dispatch(Operation::Describe, Some(&project)).await)
}

/// `ddev:start`
#[tauri::command]
pub async fn ddev_start(project: String, state: State<'_, AppState>) -> CommandResult {
    Ok(state.gui.dispatch(Operation::Start, Some(&project)).await)
}

/// `ddev:stop`
#[tauri::command]
pub async fn ddev_stop(project: String, state: State<'_, AppState>) -> CommandResult {
    Ok(state.gui.dispatch(Operation::Stop, Some(&project)).await)
}

/// `ddev:restart`
#[tauri::command]
pub async fn ddev_restart(project: String, state: State<'_, AppState>) -> CommandResult {
    Ok(state.gui.dispatch(Operation::Restart, Some(&project)).await)
}

/// `ddev:poweroff`
#[tauri::command]
pub async fn ddev_poweroff(state: State<'_, AppState>) -> CommandResult {
    Ok(state.gui.dispatch(Operation::Poweroff, None).await)
}
