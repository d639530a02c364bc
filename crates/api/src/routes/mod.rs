//! API route definitions.

use axum::Router;
use budgetlens_core::budget::date_format;
use budgetlens_shared::AppError;
use chrono::{DateTime, Utc};

use crate::AppState;

pub mod budgets;
pub mod health;
pub mod periods;

/// Creates the versioned API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(budgets::routes())
        .merge(periods::routes())
}

/// Resolves the optional `at` override into the reference instant.
pub(crate) fn resolve_now(at: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    match at {
        None => Ok(Utc::now()),
        Some(raw) => {
            date_format::parse(raw).ok_or_else(|| AppError::Validation(format!("invalid at: {raw}")))
        }
    }
}
