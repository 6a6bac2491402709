//! Semantic error types for GUI operations.
//!
//! Adapters never see these directly: the dispatcher folds them into an
//! `ApiResponse` whose `error` is the `Display` text.

use ddevdesk_core::{ToolError, UrlOpenError};
use thiserror::Error;

/// Semantic errors for GUI backend operations.
///
/// `Display` is the user-facing message. Tool and opener errors pass their
/// text through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuiError {
    /// Request validation failed (blank project name, missing argument).
    #[error("{0}")]
    ValidationFailed(String),

    /// No operation is registered under this channel name.
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// A read command could not produce its payload.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// A state-changing command failed; carries the last output line.
    #[error("{0}")]
    CommandFailed(String),

    /// The URL could not be handed to the platform opener.
    #[error(transparent)]
    Open(#[from] UrlOpenError),

    /// A result could not be serialized for the presentation layer.
    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for GuiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
