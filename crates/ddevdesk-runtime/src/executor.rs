//! The command executor.
//!
//! Runs a tool command to completion, recording every output line under a log
//! key, and turns the exit status into an [`OperationOutcome`].

use std::sync::Arc;

use ddevdesk_core::{
    COMMAND_FAILED_FALLBACK, CapturedOutput, LogEntry, LogKey, OperationOutcome, OutputStream,
    ProcessError, ProcessSpawner, ProjectLogSink, StreamKind, ToolCommand,
};
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::process::{CapturedLine, spawn_line_reader};

/// Spawns tool commands and captures their output.
///
/// There is no timeout and no cancellation: a hung tool process keeps its
/// caller waiting until it exits.
#[derive(Clone)]
pub struct CommandExecutor {
    spawner: Arc<dyn ProcessSpawner>,
    logs: Arc<dyn ProjectLogSink>,
}

impl CommandExecutor {
    pub fn new(spawner: Arc<dyn ProcessSpawner>, logs: Arc<dyn ProjectLogSink>) -> Self {
        Self { spawner, logs }
    }

    /// Run `command`, streaming its output into the log under `key`.
    ///
    /// Resolves to success on exit code zero. A nonzero exit (or none at all)
    /// fails with the last captured line, or [`COMMAND_FAILED_FALLBACK`] when
    /// the command printed nothing. A spawn error fails with the OS error text.
    pub async fn execute(&self, command: &ToolCommand, key: &LogKey) -> OperationOutcome {
        self.logs.ensure_key(key);
        let command_line = command.command_line();

        let mut child = match self.spawner.spawn(command) {
            Ok(child) => child,
            Err(e) => {
                warn!(key = %key, command = %command_line, error = %e, "failed to spawn tool command");
                return OperationOutcome::failed(e.to_string());
            }
        };
        info!(key = %key, pid = ?child.id(), command = %command_line, "tool command started");

        let (tx, mut rx) = mpsc::unbounded_channel::<CapturedLine>();
        if let Some(stdout) = child.take_stdout() {
            spawn_line_reader(stdout, key.clone(), StreamKind::Stdout, tx.clone());
        }
        if let Some(stderr) = child.take_stderr() {
            spawn_line_reader(stderr, key.clone(), StreamKind::Stderr, tx.clone());
        }
        drop(tx);

        // Per-call buffer; the channel closes once both pipes reach EOF.
        let mut captured: Vec<LogEntry> = Vec::new();
        while let Some(line) = rx.recv().await {
            let entry = self.logs.append(key, line.text);
            debug!(key = %key, stream = line.stream.as_str(), "captured line");
            captured.push(entry);
        }

        let outcome = match child.wait().await {
            Ok(Some(0)) => OperationOutcome::Succeeded,
            Ok(code) => {
                let message = captured
                    .last()
                    .map_or_else(|| COMMAND_FAILED_FALLBACK.to_string(), |e| e.message.clone());
                warn!(key = %key, exit_code = ?code, %message, "tool command failed");
                OperationOutcome::failed(message)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "failed to wait for tool command");
                OperationOutcome::failed(e.to_string())
            }
        };

        if outcome.is_success() {
            info!(key = %key, lines = captured.len(), "tool command finished");
        }
        outcome
    }

    /// Run `command` and collect its complete stdout and stderr.
    ///
    /// Nothing is written to the log. A nonzero exit is not an error here;
    /// callers inspect [`CapturedOutput::exit_code`].
    pub async fn capture(&self, command: &ToolCommand) -> Result<CapturedOutput, ProcessError> {
        let mut child = self.spawner.spawn(command)?;
        debug!(pid = ?child.id(), command = %command.command_line(), "capturing tool output");

        let (stdout, stderr) = tokio::join!(
            read_to_string(child.take_stdout()),
            read_to_string(child.take_stderr())
        );
        let exit_code = child.wait().await?;

        Ok(CapturedOutput {
            exit_code,
            stdout: stdout?,
            stderr: stderr?,
        })
    }
}

async fn read_to_string(stream: Option<OutputStream>) -> Result<String, ProcessError> {
    let Some(mut stream) = stream else {
        return Ok(String::new());
    };
    let mut buf = Vec::new();
    stream
        .read_to_end(&mut buf)
        .await
        .map_err(|e| ProcessError::Io(e.to_string()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
