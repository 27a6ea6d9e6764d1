use anyhow::Context;
use dns_test_server_api::{create_api_routes, AppState};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn bind_web(bind_addr: &str) -> anyhow::Result<TcpListener> {
    TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", bind_addr))
}

pub async fn start_web_server(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(bind_address = %listener.local_addr()?, "Starting administrative HTTP server");

    axum::serve(listener, create_api_routes(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
