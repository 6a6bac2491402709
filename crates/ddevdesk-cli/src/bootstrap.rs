//! CLI bootstrap - the composition root.
//!
//! Turns parsed flags into a `ToolConfig` and wires the production adapters
//! behind a `GuiBackend`.

use anyhow::{Context, Result};
use ddevdesk_core::{ShellLauncher, ToolConfig};
use ddevdesk_gui::{GuiBackend, GuiDeps};

use crate::parser::Cli;

/// Build the tool configuration from flags (and their environment fallbacks).
pub fn tool_config(cli: &Cli) -> Result<ToolConfig> {
    let mut config = ToolConfig::default();
    if let Some(bin) = cli.ddev_bin.as_deref() {
        config = config.with_binary(bin.trim());
    }
    if let Some(shell) = cli.shell.as_deref().filter(|s| !s.trim().is_empty()) {
        let launcher = ShellLauncher::parse(shell).context("Invalid --shell value")?;
        config = config.with_shell(Some(launcher));
    }
    Ok(config)
}

/// Compose the backend for `config`.
pub fn bootstrap(config: &ToolConfig) -> Result<GuiBackend> {
    let deps = GuiDeps::from_config(config).context("Invalid ddevdesk configuration")?;
    Ok(GuiBackend::new(deps))
}
