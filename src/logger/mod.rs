//! Logger module
//!
//! Provides logging utilities for both hosts including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Catalog adapter diagnostics
//! - Error and warning logging
//!
//! Everything is emitted as `tracing` events; `init` installs the subscriber.

mod format;

pub use format::AccessLogEntry;

use crate::config::{Config, LoggingConfig};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Static asset extensions that never produce access lines when `quiet_assets` is set
const QUIET_ASSET_EXTENSIONS: [&str; 5] = [".js", ".css", ".ico", ".png", ".jpg"];

/// Initialize the global subscriber with configuration
///
/// `RUST_LOG` takes precedence over `logging.level`. Calling this more than
/// once keeps the first subscriber.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("======================================");
    tracing::info!("  Play · Pose Dev Server");
    tracing::info!("======================================");
    tracing::info!("Server running at: http://{addr}");
    tracing::info!("Open: http://{addr}/index.html");
    tracing::info!("Static root: {}", config.static_files.root);
    tracing::info!("Playlist API: http://{addr}{}", config.api.path);
    tracing::info!("Log level: {}", config.logging.level);
    tracing::info!("Press Ctrl+C to stop");
    tracing::info!("======================================");
}

pub fn log_catalog_ready() {
    tracing::info!("[OK] Catalog client ready - Browse feature enabled");
}

pub fn log_catalog_unavailable(reason: &str) {
    tracing::warn!("[!!] Catalog client unavailable: {reason}");
    tracing::warn!("     Browse feature will show errors until this is fixed.");
}

pub fn log_server_stopped() {
    tracing::info!("Server stopped.");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("[WARN] {message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: "access", "{}", entry.format(format));
}

/// Whether a request path is a static asset whose access line is suppressed
pub fn is_quiet_asset(path: &str) -> bool {
    QUIET_ASSET_EXTENSIONS.iter().any(|ext| path.contains(ext))
}

pub fn log_api_request(action: &str, query: Option<&str>) {
    tracing::info!("[API] action={action} query={}", query.unwrap_or("-"));
}

pub fn log_upstream_failure(operation: &str, err: &impl std::fmt::Display) {
    tracing::warn!("[API] Error in {operation}: {err}");
}

pub fn log_mood_lookup(label: &str, categories: &[&str]) {
    tracing::debug!("[API] Searching for mood: {label}");
    tracing::debug!("[API] Available categories: {categories:?}");
}

pub fn log_mood_match(title: &str, params: &str) {
    tracing::debug!("[API] Found match: {title} -> {params}");
}

pub fn log_mood_fallback(title: &str) {
    tracing::debug!("[API] Using fallback: {title}");
}

pub fn log_playlist_groups(count: usize) {
    tracing::debug!("[API] Got {count} playlist groups");
}

pub fn log_playlists_returned(count: usize) {
    tracing::debug!("[API] Returning {count} playlists");
}

pub fn log_search_hits(count: usize, limit: usize) {
    tracing::debug!("[Catalog] search returned {count} hits (caller limit {limit})");
}

pub fn log_upstream_retry(endpoint: &str, attempt: u32, err: &impl std::fmt::Display) {
    tracing::warn!("[Catalog] {endpoint} attempt {attempt} failed, retrying: {err}");
}
