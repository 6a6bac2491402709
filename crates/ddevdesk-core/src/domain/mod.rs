//! Domain types for ddevdesk.
//!
//! These types describe the commands sent to the external tool and what the
//! executor records. Project payloads are the tool's own JSON and are not
//! modelled here. Nothing in this module touches processes or I/O.

mod action;
mod command;
mod log;

pub use action::{COMMAND_FAILED_FALLBACK, OperationOutcome, ProjectAction};
pub use command::ToolCommand;
pub use log::{GLOBAL_LOG_KEY, LogEntry, LogEvent, LogKey, StreamKind};
