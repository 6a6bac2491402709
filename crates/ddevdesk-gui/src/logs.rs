//! Captured output operations for GUI backend.

use ddevdesk_core::{LogEntry, LogEvent, LogKey};
use tokio::sync::broadcast;
use tracing::debug;

use crate::deps::GuiDeps;

/// Log buffer operations handler.
///
/// A missing or blank project name addresses the global key.
pub struct LogOps<'a> {
    deps: &'a GuiDeps,
}

impl<'a> LogOps<'a> {
    pub const fn new(deps: &'a GuiDeps) -> Self {
        Self { deps }
    }

    pub fn get(&self, project: Option<&str>) -> Vec<LogEntry> {
        self.deps.logs.get_logs(&LogKey::from_optional(project))
    }

    pub fn clear(&self, project: Option<&str>) {
        let key = LogKey::from_optional(project);
        debug!(key = %key, "Clearing captured output");
        self.deps.logs.clear_logs(&key);
    }

    /// Live feed of every appended entry, across all keys.
    pub fn subscribe(&self) -> broadcast::Receiver<LogEvent> {
        self.deps.logs.subscribe()
    }
}
