//! `DdevToolPort` over the real `ddev` binary.

use async_trait::async_trait;
use ddevdesk_core::{
    DdevToolPort, OperationOutcome, ProjectAction, ToolCommand, ToolConfig, ToolError,
};
use serde_json::Value;
use tracing::{debug, warn};

use super::parse::{parse_describe_output, parse_list_output};
use crate::executor::CommandExecutor;

/// Flag asking `ddev` for machine-readable output.
pub const JSON_OUTPUT_FLAG: &str = "--json-output";

/// Runs `ddev` through a [`CommandExecutor`].
///
/// Read operations capture stdout and parse it; actions stream their output
/// into the log under the action's key.
#[derive(Clone)]
pub struct DdevCli {
    binary: String,
    executor: CommandExecutor,
}

impl DdevCli {
    pub fn new(config: &ToolConfig, executor: CommandExecutor) -> Self {
        Self {
            binary: config.ddev_binary.clone(),
            executor,
        }
    }

    /// `ddev list --json-output`
    pub fn list_command(&self) -> ToolCommand {
        ToolCommand::new(&self.binary).args(["list", JSON_OUTPUT_FLAG])
    }

    /// `ddev describe <name> --json-output`
    pub fn describe_command(&self, name: &str) -> ToolCommand {
        ToolCommand::new(&self.binary).args(["describe", name, JSON_OUTPUT_FLAG])
    }

    /// `ddev <verb> [project]`
    pub fn action_command(&self, action: &ProjectAction) -> ToolCommand {
        ToolCommand::new(&self.binary).args(action.args())
    }

    /// Run a read command and return its stdout, failing on nonzero exit.
    async fn read_stdout(&self, command: &ToolCommand) -> Result<String, ToolError> {
        let output = self.executor.capture(command).await?;
        if !output.success() {
            return Err(ToolError::CommandFailed {
                command: command.command_line(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

#[async_trait]
impl DdevToolPort for DdevCli {
    async fn list_projects(&self) -> Result<Value, ToolError> {
        let command = self.list_command();
        let projects = self
            .read_stdout(&command)
            .await
            .and_then(|stdout| parse_list_output(&stdout))
            .inspect_err(|e| warn!(error = %e, "Error listing DDEV projects"))?;
        debug!(
            count = projects.as_array().map_or(0, Vec::len),
            "listed DDEV projects"
        );
        Ok(projects)
    }

    async fn describe_project(&self, name: &str) -> Result<Value, ToolError> {
        let command = self.describe_command(name);
        self.read_stdout(&command)
            .await
            .and_then(|stdout| parse_describe_output(&stdout))
            .inspect_err(|e| warn!(project = name, error = %e, "Error describing project"))
    }

    async fn run_action(&self, action: ProjectAction) -> OperationOutcome {
        let command = self.action_command(&action);
        self.executor.execute(&command, &action.log_key()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProjectLogManager, TokioSpawner};
    use std::sync::Arc;

    fn cli(binary: &str) -> DdevCli {
        let executor = CommandExecutor::new(
            Arc::new(TokioSpawner::default()),
            Arc::new(ProjectLogManager::new()),
        );
        DdevCli::new(&ToolConfig::default().with_binary(binary), executor)
    }

    #[test]
    fn test_read_commands() {
        let cli = cli("ddev");
        assert_eq!(cli.list_command().command_line(), "ddev list --json-output");
        assert_eq!(
            cli.describe_command("my-site").command_line(),
            "ddev describe my-site --json-output"
        );
    }

    #[test]
    fn test_action_commands_use_configured_binary() {
        let cli = cli("/usr/local/bin/ddev");
        assert_eq!(
            cli.action_command(&ProjectAction::Restart("my-site".into()))
                .command_line(),
            "/usr/local/bin/ddev restart my-site"
        );
        assert_eq!(
            cli.action_command(&ProjectAction::Poweroff).args,
            vec!["poweroff"]
        );
    }
}
