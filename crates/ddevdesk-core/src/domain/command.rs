//! External command descriptions.

use serde::{Deserialize, Serialize};

/// A program invocation: binary plus argv.
///
/// Arguments are kept separate so project names never pass through shell
/// interpolation. [`ToolCommand::command_line`] renders a quoted line for
/// logging, error messages, and shell launchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The invocation as a single POSIX-quoted command line.
    pub fn command_line(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(self.args.iter()))
    }
}
