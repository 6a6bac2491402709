//! Captured output lines and the keys they are grouped under.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Log key used for operations without a project scope (e.g. poweroff).
pub const GLOBAL_LOG_KEY: &str = "global";

/// Identifier under which captured output lines are grouped.
///
/// A project name, or [`GLOBAL_LOG_KEY`] for tool-wide operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogKey(String);

impl LogKey {
    /// The key for tool-wide operations.
    pub fn global() -> Self {
        Self(GLOBAL_LOG_KEY.to_string())
    }

    /// The key for a project. Blank names fall back to the global key.
    pub fn for_project(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            Self::global()
        } else {
            Self(name.to_string())
        }
    }

    /// Resolve an optional project name the way the log endpoints do.
    pub fn from_optional(name: Option<&str>) -> Self {
        name.map_or_else(Self::global, Self::for_project)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_global(&self) -> bool {
        self.0 == GLOBAL_LOG_KEY
    }
}

impl fmt::Display for LogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which pipe a line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// One captured line of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Capture time (serialized as RFC 3339).
    pub timestamp: DateTime<Utc>,
    /// The line, without its trailing newline.
    pub message: String,
}

/// A log entry published to live subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub key: LogKey,
    pub entry: LogEntry,
}
