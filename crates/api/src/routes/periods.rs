//! Budget period helpers for budget forms.

use axum::{
    Json, Router,
    extract::{Query, rejection::QueryRejection},
    routing::get,
};
use budgetlens_core::budget::{PeriodKind, date_format};
use budgetlens_shared::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// Creates the period routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/periods/default-end", get(default_end))
}

/// Query parameters for the default period end.
#[derive(Debug, Deserialize)]
pub struct DefaultEndQuery {
    /// Period kind.
    pub kind: PeriodKind,
    /// Period start (RFC 3339 or `YYYY-MM-DD`).
    pub start: String,
}

/// Default period end; `null` for custom periods.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultEndResponse {
    /// Suggested end of the period.
    pub end_date: Option<DateTime<Utc>>,
}

/// GET `/periods/default-end` - Suggested end date for a new budget.
async fn default_end(
    query: Result<Query<DefaultEndQuery>, QueryRejection>,
) -> Result<Json<DefaultEndResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let start = date_format::parse(&query.start)
        .ok_or_else(|| AppError::Validation(format!("invalid start date: {}", query.start)))?;

    Ok(Json(DefaultEndResponse {
        end_date: query.kind.default_end(start),
    }))
}
