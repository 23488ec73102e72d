use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use playpose::catalog::ytmusic::YtMusicClient;
use playpose::catalog::CatalogHandle;
use playpose::config::Config;
use playpose::function::{self, FunctionEvent};
use playpose::logger;
use playpose::playlists::PlaylistService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cfg = Arc::new(Config::load()?);
    logger::init(&cfg.logging);

    // Built once per container, reused by every warm invocation
    let catalog = CatalogHandle::from_result(YtMusicClient::new(&cfg.catalog));
    if let CatalogHandle::Unavailable(reason) = &catalog {
        logger::log_catalog_unavailable(reason);
    }
    let service = Arc::new(PlaylistService::new(catalog));

    run(service_fn(move |event: LambdaEvent<FunctionEvent>| {
        let service = Arc::clone(&service);
        let cfg = Arc::clone(&cfg);
        async move {
            Ok::<_, Error>(
                function::handle_event(&service, &cfg.api, &cfg.logging, event.payload).await,
            )
        }
    }))
    .await
}
