use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    health_check, list_animes, quotes_by_anime, quotes_by_character, random_quote, stats, AppState,
};
use crate::data::load_csv;
use crate::query::QueryEngine;
use crate::store::QuoteStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub csv_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            csv_path: PathBuf::from("AnimeQuotes.csv"),
        }
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Quote queries
        .route("/random-quote", get(random_quote))
        .route("/quotes/anime", get(quotes_by_anime))
        .route("/quotes/character", get(quotes_by_character))
        // Enumeration & aggregates
        .route("/animes", get(list_animes))
        .route("/stats", get(stats))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Run the HTTP server.
///
/// The dataset is loaded synchronously before the listener is bound, so the
/// process never serves requests without a dataset. A load failure aborts
/// startup.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (dataset, report) = load_csv(&config.csv_path)?;
    tracing::info!(
        "Loaded {} quotes from {} ({} rows skipped)",
        report.loaded,
        config.csv_path.display(),
        report.skipped
    );

    let store = Arc::new(QuoteStore::new(dataset));
    let state = Arc::new(AppState {
        engine: QueryEngine::new(store),
    });

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Starting kotoba server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("kotoba server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");

    tracing::info!("Shutdown signal received");
}
