//! Application state and event plumbing.

pub mod events;
pub mod state;

pub use state::AppState;
