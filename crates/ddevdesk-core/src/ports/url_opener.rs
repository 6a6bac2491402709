//! Port for handing URLs to the platform's default handler.

use thiserror::Error;

/// Failure to open a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlOpenError {
    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{0}")]
    Launch(String),
}

/// Opens links outside the application (browser, mail client, ...).
pub trait UrlOpenerPort: Send + Sync {
    fn open(&self, url: &str) -> Result<(), UrlOpenError>;
}
