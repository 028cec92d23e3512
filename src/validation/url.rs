// src/validation/url.rs

use crate::error::ScanError;
use url::Url;

/// Prefixes `http://` when the value carries no scheme. Pure string
/// operation; a supplied `http://` or `https://` scheme is preserved.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    }
}

/// Extracts the host component (no port, no path) from a normalized URL.
pub fn extract_host_name(raw_url: &str) -> Result<String, ScanError> {
    let parsed = Url::parse(raw_url)
        .map_err(|e| ScanError::Parsing(format!("invalid URL '{raw_url}': {e}")))?;

    match parsed.host_str() {
        Some(host) => Ok(host.to_string()),
        None => Err(ScanError::Parsing(format!("URL '{raw_url}' has no host component"))),
    }
}

/// True when the string parses as an absolute URL with a host.
pub fn is_url(s: &str) -> bool {
    Url::parse(s).map(|u| u.has_host()).unwrap_or(false)
}
