//! Project read and lifecycle operations for GUI backend.

use ddevdesk_core::{OperationOutcome, ProjectAction};
use serde_json::Value;
use tracing::{info, warn};

use crate::deps::GuiDeps;
use crate::error::GuiError;

/// Project operations handler.
pub struct ProjectOps<'a> {
    deps: &'a GuiDeps,
}

impl<'a> ProjectOps<'a> {
    pub const fn new(deps: &'a GuiDeps) -> Self {
        Self { deps }
    }

    /// List all projects the tool knows about.
    pub async fn list(&self) -> Result<Value, GuiError> {
        Ok(self.deps.tool.list_projects().await?)
    }

    /// Describe a single project.
    pub async fn describe(&self, name: &str) -> Result<Value, GuiError> {
        let name = require_project_name(name)?;
        Ok(self.deps.tool.describe_project(name).await?)
    }

    pub async fn start(&self, name: &str) -> Result<(), GuiError> {
        let name = require_project_name(name)?;
        self.run(ProjectAction::Start(name.to_string())).await
    }

    pub async fn stop(&self, name: &str) -> Result<(), GuiError> {
        let name = require_project_name(name)?;
        self.run(ProjectAction::Stop(name.to_string())).await
    }

    pub async fn restart(&self, name: &str) -> Result<(), GuiError> {
        let name = require_project_name(name)?;
        self.run(ProjectAction::Restart(name.to_string())).await
    }

    /// Stop every project and the shared router.
    pub async fn poweroff(&self) -> Result<(), GuiError> {
        self.run(ProjectAction::Poweroff).await
    }

    async fn run(&self, action: ProjectAction) -> Result<(), GuiError> {
        let verb = action.verb();
        let key = action.log_key();
        info!(action = verb, key = %key, "Running project action");

        match self.deps.tool.run_action(action).await {
            OperationOutcome::Succeeded => {
                info!(action = verb, key = %key, "Project action finished");
                Ok(())
            }
            OperationOutcome::Failed { message } => {
                warn!(action = verb, key = %key, error = %message, "Project action failed");
                Err(GuiError::CommandFailed(message))
            }
        }
    }
}

/// Trim a project name, rejecting blank ones so the tool is never run against
/// the current directory by accident.
fn require_project_name(name: &str) -> Result<&str, GuiError> {
    let name = name.trim();
    if name.is_empty() {
        Err(GuiError::ValidationFailed(
            "Project name is required".to_string(),
        ))
    } else {
        Ok(name)
    }
}
