//! Application state shared across all Tauri commands.

use std::sync::Arc;

use ddevdesk_gui::GuiBackend;
use tauri::async_runtime::JoinHandle;
use tokio::sync::RwLock;

/// Application state with shared backend.
///
/// Managed by Tauri and accessible to all commands via
/// `tauri::State<'_, AppState>`.
pub struct AppState {
    pub gui: Arc<GuiBackend>,
    /// Background task handles for proper cleanup
    pub background_tasks: Arc<RwLock<BackgroundTasks>>,
}

/// Background task handles that need to be aborted on shutdown.
#[derive(Default)]
pub struct BackgroundTasks {
    /// Terminal output event emitter task
    pub log_emitter: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(gui: Arc<GuiBackend>) -> Self {
        Self {
            gui,
            background_tasks: Arc::new(RwLock::new(BackgroundTasks::default())),
        }
    }
}
