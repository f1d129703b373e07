//! Kotoba Server
//!
//! Run with: cargo run
//!
//! Environment variables:
//! - KOTOBA_HOST: Bind address (default: 0.0.0.0)
//! - KOTOBA_PORT: Port number (default: 8080)
//! - KOTOBA_DATA: Path to the quotes CSV file (default: AnimeQuotes.csv)
//! - RUST_LOG: Log level (default: info)

use kotoba::api::{run_server, ServerConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kotoba=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse configuration from environment
    let host = std::env::var("KOTOBA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("KOTOBA_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let csv_path = std::env::var("KOTOBA_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("AnimeQuotes.csv"));

    let config = ServerConfig {
        host,
        port,
        csv_path,
    };

    tracing::info!("Kotoba configuration:");
    tracing::info!("  Host: {}:{}", config.host, config.port);
    tracing::info!("  Dataset: {}", config.csv_path.display());

    println!(
        r#"
  _  __     _        _
 | |/ /___ | |_ ___ | |__   __ _
 | ' // _ \| __/ _ \| '_ \ / _` |
 | . \ (_) | || (_) | |_) | (_| |
 |_|\_\___/ \__\___/|_.__/ \__,_|

 In-Memory Anime Quotes API Server
 Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );

    run_server(config).await
}
