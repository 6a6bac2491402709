//! Core domain types and port definitions for ddevdesk.
//!
//! This crate knows which commands are sent to `ddev`, how captured tool
//! output is keyed and timestamped, and which seams the rest of the workspace
//! plugs into. It contains no process, filesystem, or OS code.
//!
//! # Layers
//!
//! ```text
//! Adapters:   ddevdesk-cli      src-tauri
//!                  ↓                ↓
//! Facade:          └── ddevdesk-gui ┘
//!                          ↓
//! Runtime:          ddevdesk-runtime
//!                          ↓
//! Core:              ddevdesk-core
//! ```

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;

pub use config::{
    ConfigError, DDEV_BIN_ENV, DEFAULT_DDEV_BINARY, SHELL_ENV, ShellLauncher, ToolConfig,
    validate_config,
};
pub use domain::{
    COMMAND_FAILED_FALLBACK, GLOBAL_LOG_KEY, LogEntry, LogEvent, LogKey, OperationOutcome,
    ProjectAction, StreamKind, ToolCommand,
};
pub use ports::{
    CapturedOutput, ChildProcess, DdevToolPort, OutputStream, ProcessError, ProcessSpawner,
    ProjectLogSink, ToolError, UrlOpenError, UrlOpenerPort,
};
