// Configuration module entry point
// Loads typed settings from an optional TOML file, the environment and built-in defaults

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    ApiConfig, CatalogConfig, Config, LoggingConfig, ServerConfig, StaticFilesConfig,
};

/// Config file used when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "playpose.toml";

/// Environment variable that overrides the config file path
pub const CONFIG_PATH_ENV: &str = "PLAYPOSE_CONFIG";

/// Default WEB_REMIX client version reported to the catalog service
pub const DEFAULT_CLIENT_VERSION: &str = "1.20241023.01.00";

/// Default browser user agent sent upstream
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

impl Config {
    /// Load configuration from the path in `PLAYPOSE_CONFIG`, or `playpose.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from specified file path
    ///
    /// A missing file is not an error; environment variables prefixed with
    /// `PLAYPOSE` (nested keys separated by `__`) override file values.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("PLAYPOSE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from an in-memory TOML document over the defaults
    pub fn from_toml(document: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.request_timeout", 60)?
            .set_default("static_files.root", ".")?
            .set_default("api.path", "/api/playlists")?
            .set_default("api.cache_control", "s-maxage=3600, stale-while-revalidate")?
            .set_default("catalog.base_url", "https://music.youtube.com/youtubei/v1")?
            .set_default("catalog.language", "en")?
            .set_default("catalog.region", "US")?
            .set_default("catalog.client_version", DEFAULT_CLIENT_VERSION)?
            .set_default("catalog.user_agent", DEFAULT_USER_AGENT)?
            .set_default("catalog.timeout", 15)?
            .set_default("catalog.retries", 1)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("logging.quiet_assets", true)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
