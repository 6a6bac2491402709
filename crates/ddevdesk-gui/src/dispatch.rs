//! The request table: named channels the presentation layer can call.
//!
//! | Channel                | Argument        |
//! |------------------------|-----------------|
//! | `ddev:list`            | -               |
//! | `ddev:describe`        | project         |
//! | `ddev:start`           | project         |
//! | `ddev:stop`            | project         |
//! | `ddev:restart`         | project         |
//! | `ddev:poweroff`        | -               |
//! | `terminal:getOutput`   | project or none |
//! | `terminal:clearOutput` | project or none |
//! | `shell:openExternal`   | url             |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::backend::GuiBackend;
use crate::error::GuiError;
use crate::types::ApiResponse;

/// One row of the request table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Describe,
    Start,
    Stop,
    Restart,
    Poweroff,
    GetOutput,
    ClearOutput,
    OpenExternal,
}

impl Operation {
    pub const ALL: [Self; 9] = [
        Self::List,
        Self::Describe,
        Self::Start,
        Self::Stop,
        Self::Restart,
        Self::Poweroff,
        Self::GetOutput,
        Self::ClearOutput,
        Self::OpenExternal,
    ];

    /// Stable channel name.
    pub const fn channel(self) -> &'static str {
        match self {
            Self::List => "ddev:list",
            Self::Describe => "ddev:describe",
            Self::Start => "ddev:start",
            Self::Stop => "ddev:stop",
            Self::Restart => "ddev:restart",
            Self::Poweroff => "ddev:poweroff",
            Self::GetOutput => "terminal:getOutput",
            Self::ClearOutput => "terminal:clearOutput",
            Self::OpenExternal => "shell:openExternal",
        }
    }

    /// Whether the operation cannot run without an argument.
    pub const fn requires_argument(self) -> bool {
        matches!(
            self,
            Self::Describe | Self::Start | Self::Stop | Self::Restart | Self::OpenExternal
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.channel())
    }
}

impl FromStr for Operation {
    type Err = GuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.channel() == s)
            .ok_or_else(|| GuiError::UnknownChannel(s.to_string()))
    }
}

impl GuiBackend {
    /// Run a table operation by channel name.
    pub async fn call(&self, channel: &str, arg: Option<&str>) -> ApiResponse<Value> {
        match channel.parse::<Operation>() {
            Ok(op) => self.dispatch(op, arg).await,
            Err(e) => ApiResponse::failure(e.to_string()),
        }
    }

    /// Run a table operation. Never fails; errors are carried in the envelope.
    pub async fn dispatch(&self, op: Operation, arg: Option<&str>) -> ApiResponse<Value> {
        if op.requires_argument() && arg.is_none() {
            return ApiResponse::failure(format!("Missing argument for {op}"));
        }
        let required = arg.unwrap_or_default();

        match op {
            Operation::List => to_data(self.list_projects().await),
            Operation::Describe => to_data(self.describe_project(required).await),
            Operation::Start => self.start_project(required).await.into(),
            Operation::Stop => self.stop_project(required).await.into(),
            Operation::Restart => self.restart_project(required).await.into(),
            Operation::Poweroff => self.poweroff().await.into(),
            Operation::GetOutput => to_data(Ok(self.get_log(arg))),
            Operation::ClearOutput => {
                self.clear_log(arg);
                ApiResponse::done()
            }
            Operation::OpenExternal => self.open_external(required).into(),
        }
    }
}

fn to_data<T: Serialize>(result: Result<T, GuiError>) -> ApiResponse<Value> {
    result
        .and_then(|data| serde_json::to_value(data).map_err(GuiError::from))
        .into()
}

impl From<Result<(), GuiError>> for ApiResponse<Value> {
    fn from(result: Result<(), GuiError>) -> Self {
        match result {
            Ok(()) => Self::done(),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use ddevdesk_core::{
        DdevToolPort, LogKey, OperationOutcome, ProcessError, ProjectAction, ToolError,
        UrlOpenError, UrlOpenerPort,
    };
    use ddevdesk_runtime::ProjectLogManager;
    use mockall::mock;
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;
    use crate::deps::GuiDeps;

    mock! {
        pub Tool {}

        #[async_trait]
        impl DdevToolPort for Tool {
            async fn list_projects(&self) -> Result<Value, ToolError>;
            async fn describe_project(&self, name: &str) -> Result<Value, ToolError>;
            async fn run_action(&self, action: ProjectAction) -> OperationOutcome;
        }
    }

    mock! {
        pub Opener {}

        impl UrlOpenerPort for Opener {
            fn open(&self, url: &str) -> Result<(), UrlOpenError>;
        }
    }

    fn backend_with(tool: MockTool, opener: MockOpener) -> (GuiBackend, Arc<ProjectLogManager>) {
        let logs = Arc::new(ProjectLogManager::new());
        let deps = GuiDeps::new(Arc::new(tool), logs.clone(), Arc::new(opener));
        (GuiBackend::new(deps), logs)
    }

    fn backend(tool: MockTool) -> (GuiBackend, Arc<ProjectLogManager>) {
        backend_with(tool, MockOpener::new())
    }

    #[test]
    fn test_channel_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.channel().parse::<Operation>().unwrap(), op);
        }
        assert!(matches!(
            "ddev:delete".parse::<Operation>(),
            Err(GuiError::UnknownChannel(_))
        ));
    }

    #[tokio::test]
    async fn test_list_returns_projects() {
        let mut tool = MockTool::new();
        tool.expect_list_projects()
            .times(1)
            .returning(|| Ok(json!([{"name": "p1", "status": "running"}])));
        let (backend, _) = backend(tool);

        let response = backend.call("ddev:list", None).await;
        assert!(response.success);
        assert_eq!(response.data.unwrap()[0]["name"], json!("p1"));
    }

    #[tokio::test]
    async fn test_list_forwards_null_and_empty_fields_unchanged() {
        let projects = json!([{
            "name": "p1",
            "status": null,
            "type": "php",
            "approot": "/srv/p1",
            "docroot": null,
            "services": {},
            "hostnames": []
        }]);
        let expected = projects.clone();
        let mut tool = MockTool::new();
        tool.expect_list_projects()
            .returning(move || Ok(projects.clone()));
        let (backend, _) = backend(tool);

        let response = backend.dispatch(Operation::List, None).await;
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "data": expected})
        );
    }

    #[tokio::test]
    async fn test_list_with_tool_unavailable_reports_spawn_error() {
        let mut tool = MockTool::new();
        tool.expect_list_projects().returning(|| {
            Err(ToolError::Process(ProcessError::Spawn(
                "No such file or directory (os error 2)".into(),
            )))
        });
        let (backend, _) = backend(tool);

        let response = backend.dispatch(Operation::List, None).await;
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": false, "error": "No such file or directory (os error 2)"})
        );
    }

    #[tokio::test]
    async fn test_describe_forwards_name() {
        let mut tool = MockTool::new();
        tool.expect_describe_project()
            .with(eq("site"))
            .times(1)
            .returning(|name| Ok(json!({"name": name, "urls": null})));
        let (backend, _) = backend(tool);

        let response = backend.dispatch(Operation::Describe, Some(" site ")).await;
        assert_eq!(response.data, Some(json!({"name": "site", "urls": null})));
    }

    #[tokio::test]
    async fn test_blank_project_is_rejected_without_running_tool() {
        let (backend, _) = backend(MockTool::new());

        for op in [
            Operation::Describe,
            Operation::Start,
            Operation::Stop,
            Operation::Restart,
        ] {
            let response = backend.dispatch(op, Some("  ")).await;
            assert!(!response.success, "{op} accepted a blank name");
            assert_eq!(response.error.as_deref(), Some("Project name is required"));
        }
    }

    #[tokio::test]
    async fn test_missing_argument_fails() {
        let (backend, _) = backend(MockTool::new());
        let response = backend.call("ddev:start", None).await;
        assert_eq!(
            response.error.as_deref(),
            Some("Missing argument for ddev:start")
        );
    }

    #[tokio::test]
    async fn test_unknown_channel_fails() {
        let (backend, _) = backend(MockTool::new());
        let response = backend.call("ddev:ssh", Some("p1")).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Unknown channel: ddev:ssh"));
    }

    #[tokio::test]
    async fn test_start_success_has_no_error() {
        let mut tool = MockTool::new();
        tool.expect_run_action()
            .with(eq(ProjectAction::Start("p1".into())))
            .times(1)
            .returning(|_| OperationOutcome::Succeeded);
        let (backend, _) = backend(tool);

        let response = backend.dispatch(Operation::Start, Some("p1")).await;
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({"success": true}));
    }

    #[tokio::test]
    async fn test_project_name_is_trimmed_before_running() {
        let mut tool = MockTool::new();
        tool.expect_run_action()
            .with(eq(ProjectAction::Start("p1".into())))
            .times(1)
            .returning(|_| OperationOutcome::Succeeded);
        let (backend, _) = backend(tool);

        assert!(backend.dispatch(Operation::Start, Some("  p1 ")).await.success);
    }

    #[tokio::test]
    async fn test_failure_message_is_last_line_verbatim() {
        let mut tool = MockTool::new();
        tool.expect_run_action()
            .with(eq(ProjectAction::Stop("p1".into())))
            .returning(|_| OperationOutcome::failed("Failed to stop p1: container busy"));
        let (backend, _) = backend(tool);

        let response = backend.dispatch(Operation::Stop, Some("p1")).await;
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Failed to stop p1: container busy")
        );
    }

    #[tokio::test]
    async fn test_poweroff_ignores_argument() {
        let mut tool = MockTool::new();
        tool.expect_run_action()
            .with(eq(ProjectAction::Poweroff))
            .times(1)
            .returning(|_| OperationOutcome::Succeeded);
        let (backend, _) = backend(tool);

        assert!(backend.call("ddev:poweroff", Some("ignored")).await.success);
    }

    #[tokio::test]
    async fn test_get_and_clear_output() {
        let (backend, logs) = backend(MockTool::new());
        let key = LogKey::for_project("p1");
        logs.add_log(&key, "Starting p1...".into());
        logs.add_log(&key, "Successfully started p1".into());
        logs.add_log(&LogKey::global(), "Powering off".into());

        let response = backend.dispatch(Operation::GetOutput, Some("p1")).await;
        let entries = response.data.unwrap();
        assert_eq!(entries.as_array().unwrap().len(), 2);
        assert_eq!(entries[1]["message"], json!("Successfully started p1"));

        let global = backend.dispatch(Operation::GetOutput, None).await;
        assert_eq!(global.data.unwrap()[0]["message"], json!("Powering off"));

        assert!(backend.dispatch(Operation::ClearOutput, Some("p1")).await.success);
        let response = backend.dispatch(Operation::GetOutput, Some("p1")).await;
        assert_eq!(response.data, Some(json!([])));
        assert_eq!(backend.get_log(None).len(), 1);
    }

    #[tokio::test]
    async fn test_get_output_for_unknown_key_is_empty() {
        let (backend, _) = backend(MockTool::new());
        let response = backend.call("terminal:getOutput", Some("never-run")).await;
        assert!(response.success);
        assert_eq!(response.data, Some(json!([])));
    }

    #[tokio::test]
    async fn test_open_external_passes_url_and_error() {
        let mut opener = MockOpener::new();
        opener
            .expect_open()
            .times(2)
            .returning(|url| {
                if url.starts_with("https://") {
                    Ok(())
                } else {
                    Err(UrlOpenError::Launch("no handler for scheme".into()))
                }
            });
        let (backend, _) = backend_with(MockTool::new(), opener);

        let ok = backend
            .dispatch(Operation::OpenExternal, Some("https://p1.ddev.site"))
            .await;
        assert!(ok.success);

        let failed = backend
            .dispatch(Operation::OpenExternal, Some("gopher://p1"))
            .await;
        assert_eq!(failed.error.as_deref(), Some("no handler for scheme"));
    }

    #[tokio::test]
    async fn test_subscribers_see_captured_lines() {
        let (backend, logs) = backend(MockTool::new());
        let mut rx = backend.subscribe_logs();

        logs.add_log(&LogKey::for_project("p1"), "Starting p1...".into());

        let event = rx.recv().await.unwrap();
        assert_eq!(event.key.as_str(), "p1");
        assert_eq!(event.entry.message, "Starting p1...");
    }
}
