//! Subprocess boundary: spawn, stream, await exit.
//!
//! The command executor is written against these traits only, so tests can
//! substitute scripted in-memory processes for real ones.

use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use super::ProcessError;
use crate::domain::ToolCommand;

/// A readable output pipe of a child process.
pub type OutputStream = Pin<Box<dyn AsyncRead + Send>>;

/// A spawned process whose pipes can be taken and whose exit can be awaited.
#[async_trait]
pub trait ChildProcess: Send {
    /// Take the standard output pipe. Returns `None` on the second call.
    fn take_stdout(&mut self) -> Option<OutputStream>;

    /// Take the standard error pipe. Returns `None` on the second call.
    fn take_stderr(&mut self) -> Option<OutputStream>;

    /// OS process id, when there is one.
    fn id(&self) -> Option<u32>;

    /// Wait for the process to exit.
    ///
    /// Returns the exit code, or `None` when the process was terminated
    /// without one (e.g. by a signal).
    async fn wait(&mut self) -> Result<Option<i32>, ProcessError>;
}

/// Starts processes for tool commands.
pub trait ProcessSpawner: Send + Sync {
    /// Spawn `command` with piped stdout and stderr.
    ///
    /// Returns `Err(ProcessError::Spawn)` carrying the OS error text when the
    /// process cannot be started.
    fn spawn(&self, command: &ToolCommand) -> Result<Box<dyn ChildProcess>, ProcessError>;
}

/// Everything a read-style command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}
