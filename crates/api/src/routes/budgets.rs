//! Budget progress routes.
//!
//! Budgets are fetched from the Budget Service on every request and run
//! through the progress engine; nothing is cached between requests.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};
use budgetlens_core::budget::{
    Budget, BudgetOverview, BudgetProgress, BudgetProjection, Category, FilterBucket,
    ProgressEngine,
};
use budgetlens_shared::AppError;
use budgetlens_shared::types::BudgetId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AppState, error::ApiError, routes::resolve_now};

/// Creates the budget progress routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets/progress", get(list_progress))
        .route("/budgets/{budget_id}/progress", get(get_progress))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for progress endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    /// Only return budgets in this bucket. Ignored by the single-budget route.
    pub bucket: Option<FilterBucket>,
    /// Reference instant (RFC 3339 or `YYYY-MM-DD`); defaults to now.
    pub at: Option<String>,
}

/// One budget with everything a budget card renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgressView {
    /// Raw budget snapshot.
    pub budget: Budget,
    /// Category metadata, when the category is known.
    pub category: Option<Category>,
    /// List-view bucket.
    pub filter_bucket: FilterBucket,
    /// Derived progress metrics.
    pub progress: BudgetProgress,
    /// End-of-period projection.
    pub projection: BudgetProjection,
}

/// Response for the budget list.
#[derive(Debug, Serialize)]
pub struct BudgetListResponse {
    /// Budgets, optionally filtered by bucket.
    pub budgets: Vec<BudgetProgressView>,
    /// Overview of all budgets, regardless of the bucket filter.
    pub overview: BudgetOverview,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn build_view(budget: Budget, categories: &[Category], now: DateTime<Utc>) -> BudgetProgressView {
    let category = budget
        .category_id
        .and_then(|id| categories.iter().find(|c| c.id == id).cloned());

    BudgetProgressView {
        filter_bucket: ProgressEngine::classify_filter_bucket(&budget, now),
        progress: ProgressEngine::compute_progress(&budget, now),
        projection: ProgressEngine::project_spend(&budget, now),
        category,
        budget,
    }
}

/// Category metadata is cosmetic, so a Category Service failure degrades to
/// cards without category details.
async fn categories_or_empty(state: &AppState) -> Vec<Category> {
    match state.source.list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            warn!(error = %e, "Failed to fetch categories");
            Vec::new()
        }
    }
}

fn parse_query(query: Result<Query<ProgressQuery>, QueryRejection>) -> Result<ProgressQuery, ApiError> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| AppError::Validation(rejection.body_text()).into())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/budgets/progress` - List budgets with derived progress and an overview.
async fn list_progress(
    State(state): State<AppState>,
    query: Result<Query<ProgressQuery>, QueryRejection>,
) -> Result<Json<BudgetListResponse>, ApiError> {
    let query = parse_query(query)?;
    let now = resolve_now(query.at.as_deref())?;

    let budgets = state.source.list_budgets().await?;
    let categories = categories_or_empty(&state).await;
    let overview = BudgetOverview::build(&budgets, now);

    let views: Vec<BudgetProgressView> = budgets
        .into_iter()
        .map(|budget| build_view(budget, &categories, now))
        .filter(|view| query.bucket.is_none_or(|bucket| view.filter_bucket == bucket))
        .collect();

    info!(
        count = views.len(),
        bucket = ?query.bucket,
        alerts = overview.alerts_triggered,
        "Computed budget progress"
    );

    Ok(Json(BudgetListResponse {
        budgets: views,
        overview,
    }))
}

/// GET `/budgets/{budget_id}/progress` - Progress for one budget.
async fn get_progress(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
    query: Result<Query<ProgressQuery>, QueryRejection>,
) -> Result<Json<BudgetProgressView>, ApiError> {
    let query = parse_query(query)?;
    let now = resolve_now(query.at.as_deref())?;

    let budget = state.source.get_budget(budget_id).await?;
    let categories = categories_or_empty(&state).await;

    Ok(Json(build_view(budget, &categories, now)))
}
