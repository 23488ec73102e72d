// Application state module
// Shared by every connection of the dev server

use super::types::Config;
use crate::catalog::CatalogClient;
use crate::playlists::PlaylistService;

/// Application state
pub struct AppState<C> {
    pub config: Config,
    pub service: PlaylistService<C>,
}

impl<C: CatalogClient> AppState<C> {
    pub const fn new(config: Config, service: PlaylistService<C>) -> Self {
        Self { config, service }
    }

    /// Whether access lines should be written for this request path
    pub fn should_log_access(&self, path: &str) -> bool {
        self.config.logging.access_log
            && !(self.config.logging.quiet_assets && crate::logger::is_quiet_asset(path))
    }
}
