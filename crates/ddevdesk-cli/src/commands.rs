//! Subcommands and their mapping onto the request table.

use clap::Subcommand;
use ddevdesk_gui::{GuiError, Operation};

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all DDEV projects
    List,

    /// Show details for one project
    Describe {
        /// Project name
        project: String,
    },

    /// Start a project
    Start {
        /// Project name
        project: String,
    },

    /// Stop a project
    Stop {
        /// Project name
        project: String,
    },

    /// Restart a project
    Restart {
        /// Project name
        project: String,
    },

    /// Stop all projects and the DDEV router
    Poweroff,

    /// Open a URL in the default browser
    Open {
        /// Absolute URL, e.g. https://my-site.ddev.site
        url: String,
    },

    /// Invoke a channel of the request table directly
    Call {
        /// Channel name, e.g. "ddev:describe" or "terminal:getOutput"
        channel: String,
        /// Optional channel argument
        arg: Option<String>,
    },
}

impl Commands {
    /// The table operation and argument this command runs.
    pub fn operation(&self) -> Result<(Operation, Option<&str>), GuiError> {
        Ok(match self {
            Self::List => (Operation::List, None),
            Self::Describe { project } => (Operation::Describe, Some(project.as_str())),
            Self::Start { project } => (Operation::Start, Some(project.as_str())),
            Self::Stop { project } => (Operation::Stop, Some(project.as_str())),
            Self::Restart { project } => (Operation::Restart, Some(project.as_str())),
            Self::Poweroff => (Operation::Poweroff, None),
            Self::Open { url } => (Operation::OpenExternal, Some(url.as_str())),
            Self::Call { channel, arg } => (channel.parse()?, arg.as_deref()),
        })
    }
}
