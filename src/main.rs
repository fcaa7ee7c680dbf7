use user_search::config::ServerConfig;
use user_search::search::handlers::{AccessToken, router};
use user_search::store::memory::RecordStore;

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_env()?;

    // 1. Records, loaded once and shared read-only:
    let store = Arc::new(RecordStore::load(&config.dataset)?);

    // 2. HTTP Router:
    let app = router(store, AccessToken(config.access_token));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
