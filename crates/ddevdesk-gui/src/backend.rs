//! GuiBackend - the unified GUI orchestration facade.
//!
//! Tauri commands and CLI handlers delegate here, either through the typed
//! methods below or through the channel table in [`crate::dispatch`].

use ddevdesk_core::{LogEntry, LogEvent};
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::debug;

use crate::deps::GuiDeps;
use crate::error::GuiError;
use crate::logs::LogOps;
use crate::projects::ProjectOps;

/// Unified GUI backend facade.
///
/// # Construction
///
/// ```ignore
/// let deps = GuiDeps::from_config(&ToolConfig::from_env()?)?;
/// let backend = GuiBackend::new(deps);
/// ```
pub struct GuiBackend {
    deps: GuiDeps,
}

impl GuiBackend {
    pub const fn new(deps: GuiDeps) -> Self {
        Self { deps }
    }

    const fn project_ops(&self) -> ProjectOps<'_> {
        ProjectOps::new(&self.deps)
    }

    const fn log_ops(&self) -> LogOps<'_> {
        LogOps::new(&self.deps)
    }

    // =========================================================================
    // Project operations
    // =========================================================================

    /// The tool's project list, exactly as it reported it.
    pub async fn list_projects(&self) -> Result<Value, GuiError> {
        self.project_ops().list().await
    }

    pub async fn describe_project(&self, name: &str) -> Result<Value, GuiError> {
        self.project_ops().describe(name).await
    }

    pub async fn start_project(&self, name: &str) -> Result<(), GuiError> {
        self.project_ops().start(name).await
    }

    pub async fn stop_project(&self, name: &str) -> Result<(), GuiError> {
        self.project_ops().stop(name).await
    }

    pub async fn restart_project(&self, name: &str) -> Result<(), GuiError> {
        self.project_ops().restart(name).await
    }

    pub async fn poweroff(&self) -> Result<(), GuiError> {
        self.project_ops().poweroff().await
    }

    // =========================================================================
    // Log operations
    // =========================================================================

    /// Entries captured for a project, or for the global key.
    pub fn get_log(&self, project: Option<&str>) -> Vec<LogEntry> {
        self.log_ops().get(project)
    }

    pub fn clear_log(&self, project: Option<&str>) {
        self.log_ops().clear(project);
    }

    /// Subscribe to entries as they are captured.
    pub fn subscribe_logs(&self) -> broadcast::Receiver<LogEvent> {
        self.log_ops().subscribe()
    }

    // =========================================================================
    // Shell integration
    // =========================================================================

    /// Open a link in the platform's default handler.
    pub fn open_external(&self, url: &str) -> Result<(), GuiError> {
        debug!(url, "Opening external link");
        Ok(self.deps.opener.open(url)?)
    }
}
