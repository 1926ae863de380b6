//! Query server binary
//!
//! Run with: cargo run -p paperless-query --bin paperless-query-server

use std::path::PathBuf;

use paperless_query::config::{QueryServiceConfig, CONFIG_PATH_ENV};
use paperless_query::server::QueryServer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paperless_query=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = QueryServiceConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Configuration loaded");
    if let Some(path) = &config_path {
        tracing::info!("  - File: {}", path.display());
    }
    tracing::info!("  - Repository: {}", config.repository.base_url);
    tracing::info!("  - UI links: {}", config.repository.ui_base_url);
    tracing::info!("  - Timeout: {}s", config.repository.timeout_secs);
    tracing::info!("  - Page bound: {}", config.repository.max_pages);

    let server = QueryServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/info", server.address());
    println!("\nEndpoints:");
    println!("  POST /query - Ask for documents");
    println!("  POST /parse - Inspect extracted slots");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
