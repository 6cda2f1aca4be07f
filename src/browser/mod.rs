use anyhow::{bail, Context, Result};

use crate::review::is_openable;

/// Hand a pull request URL to the platform browser
///
/// Blocks until the opener returns. Non-web URLs are refused rather than
/// passed to the opener.
///
/// # Errors
/// Returns error if the URL is not http(s) or no browser can be launched
pub fn open_url(url: &str) -> Result<()> {
    if !is_openable(url) {
        bail!("Refusing to open non-web URL: {}", url);
    }
    tracing::info!(url, "opening pull request in browser");
    webbrowser::open(url).with_context(|| format!("Failed to open browser for URL: {}", url))
}
