mod cache;
mod page;
mod render;
mod server;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = listen_port();
    let hub = Arc::new(server::Hub::new());
    let app = server::router(hub);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🏒 Crease Crusaders Hub is live on port {port}");
    axum::serve(listener, app).await?;

    Ok(())
}

/// `PORT` from the environment; unset, empty, or unparseable falls back to
/// 8080.
fn listen_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .filter(|p| !p.is_empty())
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}
