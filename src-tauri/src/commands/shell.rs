//! OS integration commands.

use ddevdesk_gui::Operation;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

/// `shell:openExternal` - open a project URL in the default browser.
#[tauri::command]
pub async fn shell_open_external(url: String, state: State<'_, AppState>) -> CommandResult {
    Ok(state.gui.dispatch(Operation::OpenExternal, Some(&url)).await)
}
