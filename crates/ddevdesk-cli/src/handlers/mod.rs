//! Command handlers that delegate to `GuiBackend`.
//!
//! Handlers print the response envelope to stdout and stream captured output
//! lines to stderr while an operation runs.

use anyhow::Result;
use ddevdesk_gui::{ApiResponse, GuiBackend, LogEvent, Operation};
use serde_json::Value;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::warn;

use crate::commands::Commands;

/// Run `command` and print its envelope. Returns whether it succeeded.
pub async fn execute(backend: &GuiBackend, command: &Commands) -> Result<bool> {
    let response = match command.operation() {
        Ok((op, arg)) => run_streaming(backend, op, arg).await,
        Err(e) => ApiResponse::failure(e.to_string()),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response.success)
}

/// Dispatch `op`, echoing captured lines as they arrive.
pub async fn run_streaming(
    backend: &GuiBackend,
    op: Operation,
    arg: Option<&str>,
) -> ApiResponse<Value> {
    let mut events = backend.subscribe_logs();
    let dispatch = backend.dispatch(op, arg);
    tokio::pin!(dispatch);

    let response = loop {
        tokio::select! {
            response = &mut dispatch => break response,
            event = events.recv() => match event {
                Ok(event) => print_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Output stream lagged; some lines were not echoed");
                }
                Err(RecvError::Closed) => break (&mut dispatch).await,
            },
        }
    };

    loop {
        match events.try_recv() {
            Ok(event) => print_event(&event),
            Err(TryRecvError::Lagged(_)) => {}
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    response
}

fn print_event(event: &LogEvent) {
    eprintln!("[{}] {}", event.key, event.entry.message);
}
