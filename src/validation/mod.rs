// src/validation/mod.rs

// Host and URL validation: the front door every raw target value passes
// through before any tool sees it.

pub mod host;
pub mod ip;
pub mod url;

pub use host::{classify_host_value, resolve_domain, HostClassification};
pub use ip::is_valid_ipv4;
pub use url::{extract_host_name, is_url, normalize_url};
