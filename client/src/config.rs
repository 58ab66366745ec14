//! Build-time configuration for the browser bundle.
//!
//! The WASM bundle has no process environment at runtime, so the backend
//! location is baked in when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when `PORTAL_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// External help center linked from the sidebar.
pub const HELP_CENTER_URL: &str = match option_env!("PORTAL_HELP_CENTER_URL") {
    Some(url) => url,
    None => "https://help.example.org/portal",
};

/// Base URL of the portal backend, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("PORTAL_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Strip trailing slashes so path joining never produces `//`.
pub fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
