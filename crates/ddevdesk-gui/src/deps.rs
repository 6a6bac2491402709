//! Dependency injection for GuiBackend.

use std::sync::Arc;

use ddevdesk_core::{ConfigError, DdevToolPort, ToolConfig, UrlOpenerPort, validate_config};
use ddevdesk_runtime::{CommandExecutor, DdevCli, ProjectLogManager, SystemUrlOpener, TokioSpawner};

/// Dependencies required to construct a `GuiBackend`.
///
/// The tool and opener are trait objects so tests can substitute mocks; the
/// log store is concrete because the backend also subscribes to it.
pub struct GuiDeps {
    pub(crate) tool: Arc<dyn DdevToolPort>,
    pub(crate) logs: Arc<ProjectLogManager>,
    pub(crate) opener: Arc<dyn UrlOpenerPort>,
}

impl GuiDeps {
    pub fn new(
        tool: Arc<dyn DdevToolPort>,
        logs: Arc<ProjectLogManager>,
        opener: Arc<dyn UrlOpenerPort>,
    ) -> Self {
        Self { tool, logs, opener }
    }

    /// Wire the production adapters for `config`.
    ///
    /// The tool's action output and the backend's log endpoints share one
    /// [`ProjectLogManager`].
    pub fn from_config(config: &ToolConfig) -> Result<Self, ConfigError> {
        validate_config(config)?;

        let logs = Arc::new(ProjectLogManager::new());
        let spawner = Arc::new(TokioSpawner::new(config.shell.clone()));
        let executor = CommandExecutor::new(spawner, logs.clone());
        let tool = Arc::new(DdevCli::new(config, executor));

        Ok(Self::new(tool, logs, Arc::new(SystemUrlOpener)))
    }

    /// Access the shared log store.
    pub fn logs(&self) -> &Arc<ProjectLogManager> {
        &self.logs
    }
}
