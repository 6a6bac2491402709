//! Port for the external development-environment tool.

use async_trait::async_trait;
use serde_json::Value;

use super::ToolError;
use crate::domain::{OperationOutcome, ProjectAction};

/// The operations the GUI needs from `ddev`.
///
/// Read operations return the tool's JSON untouched (explicit `null`s and
/// unknown fields included), so the presentation layer sees exactly what the
/// tool reported.
#[async_trait]
pub trait DdevToolPort: Send + Sync {
    /// List all known projects (`ddev list --json-output`).
    ///
    /// The `raw` payload, or an empty array when the tool reports none.
    async fn list_projects(&self) -> Result<Value, ToolError>;

    /// Describe a single project (`ddev describe <name> --json-output`).
    ///
    /// The `raw` payload, or the whole document when `raw` is absent.
    async fn describe_project(&self, name: &str) -> Result<Value, ToolError>;

    /// Run a state-changing action, capturing its output under the action's
    /// log key. Never fails; failures are reported in the outcome.
    async fn run_action(&self, action: ProjectAction) -> OperationOutcome;
}
