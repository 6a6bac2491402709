// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod commands;

use std::sync::Arc;

use anyhow::Context;
use app::AppState;
use app::events::{emit_or_log, names};
use ddevdesk_core::ToolConfig;
use ddevdesk_gui::{GuiBackend, GuiDeps};
use tauri::{Manager, RunEvent};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};

/// Initialize tracing with file appender for persistent logs.
///
/// Logs are written to:
/// - stdout (for console viewing)
/// - {data_dir}/ddevdesk/logs/ddevdesk.{date} (daily rotation via tracing-appender)
///
/// Log level is controlled by RUST_LOG environment variable (default: warn).
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let log_dir = dirs::data_local_dir().map_or_else(
        || {
            eprintln!("Failed to resolve data directory for logs");
            std::path::PathBuf::from(".")
        },
        |root| root.join("ddevdesk").join("logs"),
    );

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory: {e}");
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ddevdesk");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .ok();

    // The guard must outlive the app; leak it
    std::mem::forget(guard);
}

/// Forward every captured output line to the window as `terminal-output`.
fn spawn_log_emitter(app: &tauri::App) {
    let app_handle = app.handle().clone();
    let state: tauri::State<AppState> = app.state();
    let mut receiver = state.gui.subscribe_logs();

    let log_task = tauri::async_runtime::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(event) => emit_or_log(&app_handle, names::TERMINAL_OUTPUT, &event),
                Err(RecvError::Lagged(n)) => {
                    debug!(skipped = %n, "Terminal output receiver lagged");
                }
                Err(RecvError::Closed) => {
                    debug!("Terminal output channel closed");
                    break;
                }
            }
        }
    });

    state.background_tasks.blocking_write().log_emitter = Some(log_task);
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ToolConfig::from_env().context("Invalid ddevdesk configuration")?;
    info!(binary = %config.ddev_binary, shell = ?config.shell, "Starting ddevdesk");
    let deps = GuiDeps::from_config(&config).context("Invalid ddevdesk configuration")?;
    let gui = Arc::new(GuiBackend::new(deps));

    let app = tauri::Builder::default()
        .manage(AppState::new(gui))
        .setup(|app| {
            spawn_log_emitter(app);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::ddev::ddev_list,
            commands::ddev::ddev_describe,
            commands::ddev::ddev_start,
            commands::ddev::ddev_stop,
            commands::ddev::ddev_restart,
            commands::ddev::ddev_poweroff,
            commands::terminal::terminal_get_output,
            commands::terminal::terminal_clear_output,
            commands::shell::shell_open_external,
        ])
        .build(tauri::generate_context!())
        .context("Error while building tauri application")?;

    app.run(|app_handle, event| {
        if let RunEvent::Exit = event {
            let state: tauri::State<AppState> = app_handle.state();
            if let Some(task) = state.background_tasks.blocking_write().log_emitter.take() {
                task.abort();
            }
        }
    });

    Ok(())
}
