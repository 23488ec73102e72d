use std::sync::Arc;

use playpose::catalog::ytmusic::YtMusicClient;
use playpose::catalog::CatalogHandle;
use playpose::config::{self, AppState};
use playpose::logger;
use playpose::playlists::PlaylistService;
use playpose::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // An explicit config path may be given as the first argument
    let cfg = match std::env::args().nth(1) {
        Some(path) => config::Config::load_from(&path)?,
        None => config::Config::load()?,
    };
    logger::init(&cfg.logging);

    // Single logical request loop on one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let catalog = CatalogHandle::from_result(YtMusicClient::new(&cfg.catalog));
    match &catalog {
        CatalogHandle::Ready(_) => logger::log_catalog_ready(),
        CatalogHandle::Unavailable(reason) => logger::log_catalog_unavailable(reason),
    }

    logger::log_server_start(&addr, &cfg);
    let state = Arc::new(AppState::new(cfg, PlaylistService::new(catalog)));

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, state)).await
}
