//! Compile-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is baked in at build time from `COMANDA_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API server used when `COMANDA_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// `localStorage` key holding the raw session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Dashboard table overview refresh period.
pub const DASHBOARD_REFRESH_SECS: u64 = 10;

/// Maximum accepted product image size (5 MiB).
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Resolved API base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("COMANDA_API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    raw.trim_end_matches('/').to_owned()
}

/// Build an absolute image URL for a product image path returned by the API.
///
/// Absolute `http(s)` URLs pass through; relative paths are served by the API host.
pub fn resolve_image_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    if path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}

/// Console log level for the hydrated bundle.
#[cfg(feature = "hydrate")]
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}
