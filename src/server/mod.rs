// Server module entry point
// Listener creation, the accept loop and per-connection serving

pub mod connection;
pub mod listener;

pub use listener::create_reusable_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::catalog::CatalogClient;
use crate::config::AppState;
use crate::logger;

/// Accept connections until Ctrl+C
///
/// Must run inside a `LocalSet`; connections are spawned locally.
pub async fn run<C: CatalogClient + 'static>(
    listener: TcpListener,
    state: Arc<AppState<C>>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    logger::log_error(&format!("Failed to listen for shutdown signal: {e}"));
                }
                logger::log_server_stopped();
                return Ok(());
            }
        }
    }
}
