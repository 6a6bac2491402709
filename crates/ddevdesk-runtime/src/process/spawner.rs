//! `tokio::process` implementation of the subprocess boundary.

use std::process::Stdio;

use async_trait::async_trait;
use ddevdesk_core::{
    ChildProcess, OutputStream, ProcessError, ProcessSpawner, ShellLauncher, ToolCommand,
};
use tokio::process::{Child, Command};
use tracing::debug;

/// Spawns tool commands as real OS processes.
///
/// When a shell launcher is configured the command is rendered as a quoted
/// command line and passed to the shell, otherwise the binary is executed
/// directly with its argv.
#[derive(Debug, Clone, Default)]
pub struct TokioSpawner {
    shell: Option<ShellLauncher>,
}

impl TokioSpawner {
    pub fn new(shell: Option<ShellLauncher>) -> Self {
        Self { shell }
    }

    fn build_command(&self, command: &ToolCommand) -> Command {
        let mut cmd = match &self.shell {
            Some(shell) => {
                let mut cmd = Command::new(&shell.program);
                cmd.args(&shell.args).arg(command.command_line());
                cmd
            }
            None => {
                let mut cmd = Command::new(&command.program);
                cmd.args(&command.args);
                cmd
            }
        };

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl ProcessSpawner for TokioSpawner {
    fn spawn(&self, command: &ToolCommand) -> Result<Box<dyn ChildProcess>, ProcessError> {
        let child = self
            .build_command(command)
            .spawn()
            .map_err(|e| ProcessError::spawn(&e))?;
        debug!(pid = ?child.id(), command = %command.command_line(), "spawned tool process");
        Ok(Box::new(TokioChild { child }))
    }
}

/// A running `tokio::process::Child`.
struct TokioChild {
    child: Child,
}

#[async_trait]
impl ChildProcess for TokioChild {
    fn take_stdout(&mut self) -> Option<OutputStream> {
        self.child
            .stdout
            .take()
            .map(|s| Box::pin(s) as OutputStream)
    }

    fn take_stderr(&mut self) -> Option<OutputStream> {
        self.child
            .stderr
            .take()
            .map(|s| Box::pin(s) as OutputStream)
    }

    fn id(&self) -> Option<u32> {
        self.child.id()
    }

    async fn wait(&mut self) -> Result<Option<i32>, ProcessError> {
        let status = self
            .child
            .wait()
            .await
            .map_err(|e| ProcessError::Wait(e.to_string()))?;
        Ok(status.code())
    }
}
