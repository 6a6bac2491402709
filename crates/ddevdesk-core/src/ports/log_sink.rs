//! Log sink port for captured tool output.
//!
//! This port abstracts the destination for lines read from a running tool
//! command, so the executor does not depend on the concrete log store.

use crate::domain::{LogEntry, LogKey};

/// Port for appending captured lines under a log key.
///
/// Implementations must be thread-safe; readers for different keys append
/// concurrently.
pub trait ProjectLogSink: Send + Sync {
    /// Make sure `key` exists, empty if it has no entries yet.
    fn ensure_key(&self, key: &LogKey);

    /// Append a line under `key` and return the stored entry.
    ///
    /// The returned timestamp is never earlier than the key's previous entry.
    fn append(&self, key: &LogKey, message: String) -> LogEntry;
}
