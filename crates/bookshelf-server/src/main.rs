use anyhow::{Context, Result};
use bookshelf_server::{app, AppState, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!("Loaded environment from {:?}", path);
    }

    let config = Config::load_from_env()?;
    tracing::info!(database = %config.database.url, "bookshelf starting");

    let state = AppState::from_config(&config).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
