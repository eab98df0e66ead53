use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio::config::Config;
use portfolio::content::Portfolio;
use portfolio::routes::build_router;
use portfolio::state::AppState;
use portfolio::theme::{FileSlot, MemorySlot, PreferenceSlot, ThemeStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Page content
    let portfolio = match &config.content_path {
        Some(path) => Portfolio::load(path)
            .await
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => {
            info!("CONTENT_PATH not set, serving bundled sample content");
            Portfolio::sample().context("bundled sample content is invalid")?
        }
    };

    // Theme preference: read once here, written on every change
    let slot: Arc<dyn PreferenceSlot> = match &config.theme_store_path {
        Some(path) => Arc::new(FileSlot::new(path)),
        None => Arc::new(MemorySlot::default()),
    };
    let theme = ThemeStore::init(slot).await?;

    let state = AppState {
        portfolio: Arc::new(portfolio),
        theme: Arc::new(theme),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
