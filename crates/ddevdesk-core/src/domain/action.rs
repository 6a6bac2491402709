//! State-changing project actions and their outcomes.

use serde::{Deserialize, Serialize};

use super::log::LogKey;

/// Failure message used when a command exits nonzero without printing anything.
pub const COMMAND_FAILED_FALLBACK: &str = "Command failed";

/// A state-changing operation on one project or on the whole tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "project", rename_all = "lowercase")]
pub enum ProjectAction {
    Start(String),
    Stop(String),
    Restart(String),
    /// Stops every project and the shared router.
    Poweroff,
}

impl ProjectAction {
    /// The tool verb for this action.
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Start(_) => "start",
            Self::Stop(_) => "stop",
            Self::Restart(_) => "restart",
            Self::Poweroff => "poweroff",
        }
    }

    /// The targeted project, if the action is project-scoped.
    pub fn project(&self) -> Option<&str> {
        match self {
            Self::Start(name) | Self::Stop(name) | Self::Restart(name) => Some(name),
            Self::Poweroff => None,
        }
    }

    /// Arguments passed to the tool after the binary name.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.verb().to_string()];
        if let Some(name) = self.project() {
            args.push(name.to_string());
        }
        args
    }

    /// The log key this action's output is recorded under.
    pub fn log_key(&self) -> LogKey {
        self.project()
            .map_or_else(LogKey::global, LogKey::for_project)
    }
}

/// Result of running a state-changing command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum OperationOutcome {
    Succeeded,
    Failed { message: String },
}

impl OperationOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Succeeded => None,
            Self::Failed { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_args() {
        assert_eq!(ProjectAction::Start("p1".into()).args(), vec!["start", "p1"]);
        assert_eq!(ProjectAction::Restart("p1".into()).args(), vec!["restart", "p1"]);
        assert_eq!(ProjectAction::Poweroff.args(), vec!["poweroff"]);
    }

    #[test]
    fn test_action_log_keys() {
        assert_eq!(ProjectAction::Stop("p1".into()).log_key().as_str(), "p1");
        assert!(ProjectAction::Poweroff.log_key().is_global());
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(OperationOutcome::Succeeded.is_success());
        assert_eq!(OperationOutcome::Succeeded.error(), None);

        let failed = OperationOutcome::failed("boom");
        assert!(!failed.is_success());
        assert_eq!(failed.error(), Some("boom"));
    }
}
