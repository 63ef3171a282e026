/// Server setup and initialization
///
/// Wires the content source and presentation helpers into HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::{create_content_routes, create_presentation_routes, AppState},
    config::Config,
    content::ContentSource,
};
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Create the main Axum application from configuration
///
/// Builds the configured content source (decoding the local catalog when
/// selected) and mounts every route on it.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("📚 Initializing {:?} content source", config.content.source);
    let content = ContentSource::from_config(&config.content)
        .map_err(|e| anyhow::anyhow!("Failed to initialize content source: {}", e))?;

    let app = build_router(content);

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Mount every route on the given content source
pub fn build_router(content: ContentSource) -> Router {
    let app_state = AppState {
        content: Arc::new(content),
    };

    tracing::info!("📡 Creating HTTP router with all endpoints");
    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Projects and notes
        .merge(create_content_routes())
        // Themes and status badges
        .merge(create_presentation_routes())
        .with_state(app_state)
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise folio logs at info. Safe to call twice.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .try_init();
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured address and port.
pub async fn start_server(config: Config) -> Result<()> {
    init_tracing();

    tracing::info!("Starting folio server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
