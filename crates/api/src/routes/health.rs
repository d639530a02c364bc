//! Liveness probe.

use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Liveness {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    server_time: DateTime<Utc>,
}

// Never calls the Budget Service.
async fn liveness() -> Json<Liveness> {
    Json(Liveness {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        server_time: Utc::now(),
    })
}

/// `GET /health`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(liveness))
}
