// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Dev server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// End-to-end connection timeout in seconds
    pub request_timeout: u64,
}

/// Static file configuration for the dev server
#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub root: String,
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string(), "index.htm".to_string()]
}

/// Playlist API surface configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Path prefix routed to the playlist API
    pub path: String,
    /// `Cache-Control` value sent by the serverless function
    pub cache_control: String,
}

/// Upstream catalog client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub language: String,
    pub region: String,
    pub client_version: String,
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout: u64,
    /// Extra attempts after a transient failure
    pub retries: u32,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    pub access_log_format: String,
    /// Skip access lines for script, style and image assets
    pub quiet_assets: bool,
}
