//! Async line readers for child process pipes (non-UTF8-safe).
//!
//! `ddev` shells out to docker and friends, which can emit non-UTF8 bytes.
//! Using `BufReader::lines()` would end the reader on invalid UTF-8, so lines
//! are read as bytes and decoded lossily.

use ddevdesk_core::{LogKey, StreamKind};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

/// One non-blank line read from a pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CapturedLine {
    pub stream: StreamKind,
    pub text: String,
}

/// Spawn a task that forwards every non-blank line of `stream` to `tx`.
///
/// The task ends at EOF, on a read error, or when the receiver is dropped.
/// Dropping the last sender is how the receiver learns both pipes are done.
pub(crate) fn spawn_line_reader<R>(
    stream: R,
    key: LogKey,
    kind: StreamKind,
    tx: mpsc::UnboundedSender<CapturedLine>,
) where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        forward_lines(stream, &key, kind, &tx).await;
        debug!(key = %key, stream = kind.as_str(), "line reader task exiting");
    });
}

/// Read `stream` to EOF, sending each non-blank line.
pub(crate) async fn forward_lines<R>(
    stream: R,
    key: &LogKey,
    kind: StreamKind,
    tx: &mpsc::UnboundedSender<CapturedLine>,
) where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut buf: Vec<u8> = Vec::with_capacity(1024);

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break, // EOF
            Ok(_) => {
                let Some(text) = decode_line(&buf) else {
                    continue;
                };
                debug!(key = %key, stream = kind.as_str(), "{}", text);
                if tx.send(CapturedLine { stream: kind, text }).is_err() {
                    break;
                }
            }
            Err(e) => {
                debug!(key = %key, stream = kind.as_str(), error = %e, "line reader exiting due to read error");
                break;
            }
        }
    }
}

/// Strip the line terminator and drop whitespace-only lines.
fn decode_line(raw: &[u8]) -> Option<String> {
    let mut bytes = raw;
    if let Some(rest) = bytes.strip_suffix(b"\n") {
        bytes = rest;
    }
    if let Some(rest) = bytes.strip_suffix(b"\r") {
        bytes = rest;
    }
    let text = String::from_utf8_lossy(bytes);
    if text.trim().is_empty() {
        None
    } else {
        Some(text.into_owned())
    }
}
