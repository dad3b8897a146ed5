//! Main entry point of the service.
//! Loads the configuration, sets up logging and starts the Axum server.

use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{info, warn};

use ani_validation::{backend, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let app = backend::router::get_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to open web server listener on {}", config.addr))?;

    info!("Listening on {}", config.addr);
    info!("Allowing requests from {:?}", config.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to bind Axum to listener")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
