//! Tool configuration and validation.
//!
//! Pure data: adapters decide where values come from (environment, `.env`,
//! command-line flags) and hand them to [`ToolConfig::from_lookup`] or the
//! builder methods.

use serde::{Deserialize, Serialize};

/// Default name of the external tool binary, resolved through `PATH`.
pub const DEFAULT_DDEV_BINARY: &str = "ddev";

/// Environment variable overriding the tool binary.
pub const DDEV_BIN_ENV: &str = "DDEVDESK_DDEV_BIN";

/// Environment variable holding an optional shell launcher, e.g. `/bin/zsh -lc`.
pub const SHELL_ENV: &str = "DDEVDESK_SHELL";

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("ddev binary cannot be empty")]
    EmptyBinary,

    #[error("Shell launcher cannot be empty")]
    EmptyShell,

    #[error("Invalid shell launcher {launcher:?}: {reason}")]
    InvalidShell { launcher: String, reason: String },
}

/// A shell used to run tool commands, split into program and leading args.
///
/// The quoted command line is appended as the final argument, so a launcher
/// of `/bin/zsh -lc` runs `ddev start site` as
/// `/bin/zsh -lc "ddev start site"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellLauncher {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellLauncher {
    /// Parse a launcher using POSIX shell word splitting.
    pub fn parse(launcher: &str) -> Result<Self, ConfigError> {
        let mut words = shell_words::split(launcher)
            .map_err(|e| ConfigError::InvalidShell {
                launcher: launcher.to_string(),
                reason: e.to_string(),
            })?
            .into_iter();
        let program = words.next().ok_or(ConfigError::EmptyShell)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

/// How the external tool is located and launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Binary name or path of the tool.
    pub ddev_binary: String,

    /// Optional shell launcher wrapping every invocation.
    pub shell: Option<ShellLauncher>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            ddev_binary: DEFAULT_DDEV_BINARY.to_string(),
            shell: None,
        }
    }
}

impl ToolConfig {
    /// Build a configuration from a variable lookup (usually `std::env::var`).
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(bin) = lookup(DDEV_BIN_ENV).filter(|v| !v.trim().is_empty()) {
            config.ddev_binary = bin.trim().to_string();
        }
        if let Some(shell) = lookup(SHELL_ENV).filter(|v| !v.trim().is_empty()) {
            config.shell = Some(ShellLauncher::parse(&shell)?);
        }
        validate_config(&config)?;
        Ok(config)
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Override the tool binary.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.ddev_binary = binary.into();
        self
    }

    /// Override the shell launcher.
    #[must_use]
    pub fn with_shell(mut self, shell: Option<ShellLauncher>) -> Self {
        self.shell = shell;
        self
    }
}

/// Validate configuration values.
pub fn validate_config(config: &ToolConfig) -> Result<(), ConfigError> {
    if config.ddev_binary.trim().is_empty() {
        return Err(ConfigError::EmptyBinary);
    }

    if config
        .shell
        .as_ref()
        .is_some_and(|s| s.program.trim().is_empty())
    {
        return Err(ConfigError::EmptyShell);
    }

    Ok(())
}
