//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `tokio::process` types in any signature
//! - Error `Display` output is the user-facing message, verbatim
//! - Intent-based methods for the tool port (not argv-leaking)

pub mod ddev_tool;
pub mod log_sink;
pub mod process_spawner;
pub mod url_opener;

use thiserror::Error;

pub use ddev_tool::DdevToolPort;
pub use log_sink::ProjectLogSink;
pub use process_spawner::{CapturedOutput, ChildProcess, OutputStream, ProcessSpawner};
pub use url_opener::{UrlOpenError, UrlOpenerPort};

/// Errors raised at the subprocess boundary.
///
/// Messages carry the low-level error text unchanged so it can be shown to
/// the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// The process could not be spawned (missing binary, permissions, ...).
    #[error("{0}")]
    Spawn(String),

    /// Waiting for the process to exit failed.
    #[error("{0}")]
    Wait(String),

    /// Reading one of the output pipes failed.
    #[error("{0}")]
    Io(String),
}

impl ProcessError {
    pub fn spawn(err: &std::io::Error) -> Self {
        Self::Spawn(err.to_string())
    }
}

/// Errors from read-style tool invocations (`list`, `describe`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The tool could not be run at all.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// The tool ran but exited nonzero.
    #[error("Command failed: {command}{}", stderr_suffix(.stderr))]
    CommandFailed {
        /// Quoted command line that was run.
        command: String,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// Standard output was not the expected JSON document.
    #[error("{0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{stderr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_message_is_verbatim() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = ProcessError::spawn(&io);
        assert_eq!(err.to_string(), "No such file or directory");

        let tool: ToolError = err.into();
        assert_eq!(tool.to_string(), "No such file or directory");
    }

    #[test]
    fn test_command_failed_includes_stderr() {
        let err = ToolError::CommandFailed {
            command: "ddev describe nope --json-output".to_string(),
            stderr: "Failed to describe project nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Command failed: ddev describe nope --json-output\nFailed to describe project nope"
        );
    }

    #[test]
    fn test_command_failed_without_stderr() {
        let err = ToolError::CommandFailed {
            command: "ddev list --json-output".to_string(),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "Command failed: ddev list --json-output");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ToolError = parse.into();
        assert!(matches!(err, ToolError::InvalidJson(_)));
    }
}
