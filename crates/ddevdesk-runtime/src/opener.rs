//! Opens project links with the platform's default handler.

use ddevdesk_core::{UrlOpenError, UrlOpenerPort};
use tracing::{debug, warn};
use url::Url;

/// Check that `url` is an absolute URL before it leaves the application.
pub fn validate_external_url(url: &str) -> Result<Url, UrlOpenError> {
    Url::parse(url.trim()).map_err(|e| UrlOpenError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// [`UrlOpenerPort`] backed by the `open` crate (xdg-open, `open`, `start`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpenerPort for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<(), UrlOpenError> {
        let parsed = validate_external_url(url)?;
        debug!(url = %parsed, "opening external URL");
        open::that_detached(parsed.as_str()).map_err(|e| {
            warn!(url = %parsed, error = %e, "Error opening external URL");
            UrlOpenError::Launch(e.to_string())
        })
    }
}
