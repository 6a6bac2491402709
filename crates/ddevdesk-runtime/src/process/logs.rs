//! Per-project log storage.
//!
//! Captured tool output is kept in memory for the life of the application,
//! grouped by log key, and mirrored to a broadcast channel so adapters can
//! stream it to the GUI in real time.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use ddevdesk_core::{LogEntry, LogEvent, LogKey, ProjectLogSink};
use tokio::sync::broadcast;

/// Capacity of the live event channel. Slow subscribers see `Lagged` rather
/// than blocking appends.
const BROADCAST_CAPACITY: usize = 1000;

/// Manages log buffers and the broadcast channel for all log keys.
///
/// Buffers are unbounded and only shrink on an explicit [`clear_logs`].
///
/// [`clear_logs`]: ProjectLogManager::clear_logs
pub struct ProjectLogManager {
    /// Log buffers keyed by project name (or the global key)
    buffers: RwLock<HashMap<LogKey, Vec<LogEntry>>>,
    /// Broadcast sender for log events (all keys)
    broadcast_tx: broadcast::Sender<LogEvent>,
}

impl ProjectLogManager {
    pub fn new() -> Self {
        let (broadcast_tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            buffers: RwLock::new(HashMap::new()),
            broadcast_tx,
        }
    }

    /// Add a log line under `key` (sync - callable from any task).
    pub fn add_log(&self, key: &LogKey, message: String) -> LogEntry {
        let entry = {
            let mut buffers = self
                .buffers
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let buffer = buffers.entry(key.clone()).or_default();

            // Keep per-key order monotonic even if the wall clock steps back.
            let mut timestamp = Utc::now();
            if let Some(last) = buffer.last() {
                timestamp = timestamp.max(last.timestamp);
            }
            let entry = LogEntry { timestamp, message };
            buffer.push(entry.clone());
            entry
        };

        // Ignore the error: it only means nobody is listening.
        let _ = self.broadcast_tx.send(LogEvent {
            key: key.clone(),
            entry: entry.clone(),
        });

        entry
    }

    /// Get all entries for `key`, oldest first. Unknown keys yield nothing.
    pub fn get_logs(&self, key: &LogKey) -> Vec<LogEntry> {
        let buffers = self.buffers.read().unwrap_or_else(PoisonError::into_inner);
        buffers.get(key).cloned().unwrap_or_default()
    }

    /// Reset `key` to an empty buffer.
    pub fn clear_logs(&self, key: &LogKey) {
        let mut buffers = self
            .buffers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        buffers.insert(key.clone(), Vec::new());
    }

    /// Create an empty buffer for `key` unless one exists.
    pub fn init_key(&self, key: &LogKey) {
        let mut buffers = self
            .buffers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        buffers.entry(key.clone()).or_default();
    }

    /// All keys that have a buffer, sorted.
    pub fn keys(&self) -> Vec<LogKey> {
        let buffers = self.buffers.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<LogKey> = buffers.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Get a broadcast receiver for log events.
    pub fn subscribe(&self) -> broadcast::Receiver<LogEvent> {
        self.broadcast_tx.subscribe()
    }
}

impl Default for ProjectLogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectLogSink for ProjectLogManager {
    fn ensure_key(&self, key: &LogKey) {
        self.init_key(key);
    }

    fn append(&self, key: &LogKey, message: String) -> LogEntry {
        self.add_log(key, message)
    }
}
