//! Process infrastructure: spawning, line streaming, and log storage.
//!
//! # Structure
//!
//! - `TokioSpawner` - spawns tool commands with piped output
//! - `spawn_line_reader` - turns a pipe into a stream of trimmed lines
//! - `ProjectLogManager` - keyed log buffers plus a broadcast channel

mod logs;
mod spawner;
mod stream;

pub use logs::ProjectLogManager;
pub use spawner::TokioSpawner;
pub(crate) use stream::{CapturedLine, spawn_line_reader};
