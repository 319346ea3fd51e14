//! ALI HTTP Server Binary
//!
//! This is the main entry point for the Airport Lounge Intelligence REST
//! API server. It loads the historical series, wires the default predictor,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ali-server --features "http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `LOUNGE_CONFIG`: Path to lounge.toml (default: searched in standard locations)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use ali_rust::config::LoungeConfig;
use ali_rust::data::FeatureStore;
use ali_rust::forecast::BaselinePredictor;
use ali_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting ALI HTTP Server");

    // Resolve configuration: explicit path wins, then standard locations,
    // then built-in defaults
    let config = match env::var("LOUNGE_CONFIG") {
        Ok(path) => LoungeConfig::from_file(&path)?,
        Err(_) => LoungeConfig::from_default_location().unwrap_or_else(|e| {
            warn!("{}; using built-in defaults", e);
            LoungeConfig::default()
        }),
    };

    let store = FeatureStore::from_csv(&config.data.history_csv)?;
    info!(
        "loaded {} historical records from {}",
        store.len(),
        config.data.history_csv.display()
    );

    if let Some(processed) = &config.data.processed_csv {
        store.persist_processed(processed)?;
        info!("persisted lag-augmented series to {}", processed.display());
    }

    // Create application state
    let state = AppState::new(
        Arc::new(store),
        Arc::new(BaselinePredictor::default()),
        config.analytics.clone(),
    );

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
