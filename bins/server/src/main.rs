//! Budgetlens API Server
//!
//! Main entry point for the budget progress read-model service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use budgetlens_api::{AppState, create_router};
use budgetlens_client::HttpBudgetClient;
use budgetlens_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budgetlens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let client = HttpBudgetClient::new(&config.budget_service)
        .context("Failed to build Budget Service client")?;
    info!(
        base_url = %client.base_url(),
        timeout_secs = config.budget_service.timeout_secs,
        "Budget Service client configured"
    );

    let state = AppState {
        source: Arc::new(client),
    };
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
