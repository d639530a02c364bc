//! Router tests with a mocked Budget Service.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use budgetlens_client::{BudgetSource, ClientError};
use budgetlens_core::budget::{Budget, Category, PeriodKind};
use budgetlens_shared::types::{BudgetId, CategoryId};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use http_body_util::BodyExt;
use mockall::mock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

mock! {
    pub Source {}

    #[async_trait]
    impl BudgetSource for Source {
        async fn list_budgets(&self) -> Result<Vec<Budget>, ClientError>;
        async fn get_budget(&self, id: BudgetId) -> Result<Budget, ClientError>;
        async fn list_categories(&self) -> Result<Vec<Category>, ClientError>;
    }
}

const AT: &str = "2026-10-15T12:00:00Z";

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap()
}

fn food() -> Category {
    Category {
        id: CategoryId::from_str("0190f6c4-3b1a-7c2e-9d4f-2a6b8c0d1e30").unwrap(),
        name: "Food".to_string(),
        color: Some("#FF9800".to_string()),
        icon: Some("restaurant".to_string()),
    }
}

fn budget(name: &str, amount: Decimal, spent: Decimal) -> Budget {
    Budget {
        id: BudgetId::new(),
        name: name.to_string(),
        amount,
        spent,
        period_kind: PeriodKind::Monthly,
        start_date: at() - TimeDelta::days(14),
        end_date: at() + TimeDelta::days(16),
        alert_threshold: 80,
        is_active: true,
        category_id: None,
    }
}

fn sample_budgets() -> Vec<Budget> {
    let mut groceries = budget("Groceries", dec!(1000), dec!(850));
    groceries.category_id = Some(food().id);

    let mut paused = budget("Gym", dec!(50), dec!(0));
    paused.is_active = false;

    let mut expired = budget("September", dec!(500), dec!(600));
    expired.start_date = at() - TimeDelta::days(45);
    expired.end_date = at() - TimeDelta::days(10);

    vec![groceries, budget("Transport", dec!(200), dec!(20)), paused, expired]
}

fn app(source: MockSource) -> axum::Router {
    create_router(AppState {
        source: Arc::new(source),
    })
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        other => Decimal::from_str(&other.to_string()).unwrap(),
    }
}

fn source_with(budgets: Vec<Budget>) -> MockSource {
    let mut source = MockSource::new();
    source
        .expect_list_budgets()
        .returning(move || Ok(budgets.clone()));
    source
        .expect_list_categories()
        .returning(|| Ok(vec![food()]));
    source
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app(MockSource::new()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "budgetlens-api");
    assert!(body["serverTime"].is_string());
}

#[tokio::test]
async fn test_list_progress_computes_every_budget() {
    let app = app(source_with(sample_budgets()));

    let (status, body) = get_json(app, &format!("/api/v1/budgets/progress?at={AT}")).await;

    assert_eq!(status, StatusCode::OK);
    let budgets = body["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 4);

    let groceries = &budgets[0];
    assert_eq!(groceries["filterBucket"], "active");
    assert_eq!(groceries["progress"]["status"], "critical");
    assert_eq!(decimal(&groceries["progress"]["spentPercentage"]), dec!(85));
    assert_eq!(groceries["progress"]["daysRemaining"], 16);
    assert_eq!(groceries["category"]["name"], "Food");

    assert_eq!(budgets[1]["category"], Value::Null);
    assert_eq!(budgets[2]["filterBucket"], "paused");

    let expired = &budgets[3];
    assert_eq!(expired["filterBucket"], "expired");
    assert_eq!(expired["progress"]["status"], "exceeded");
    assert_eq!(decimal(&expired["progress"]["remaining"]), dec!(-100));
    assert_eq!(decimal(&expired["progress"]["dailyBudgetRemaining"]), dec!(-100));
    assert_eq!(decimal(&expired["progress"]["progressBarPercentage"]), dec!(100));
}

#[tokio::test]
async fn test_list_progress_overview_ignores_bucket_filter() {
    let app = app(source_with(sample_budgets()));

    let (status, body) =
        get_json(app, &format!("/api/v1/budgets/progress?bucket=paused&at={AT}")).await;

    assert_eq!(status, StatusCode::OK);
    let budgets = body["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0]["budget"]["name"], "Gym");

    let overview = &body["overview"];
    assert_eq!(overview["buckets"]["active"], 2);
    assert_eq!(overview["buckets"]["paused"], 1);
    assert_eq!(overview["buckets"]["expired"], 1);
    assert_eq!(decimal(&overview["totalAmount"]), dec!(1200));
    assert_eq!(decimal(&overview["totalSpent"]), dec!(870));
    assert_eq!(overview["alertsTriggered"], 1);
}

#[tokio::test]
async fn test_categories_failure_degrades_gracefully() {
    let budgets = sample_budgets();
    let mut source = MockSource::new();
    source
        .expect_list_budgets()
        .returning(move || Ok(budgets.clone()));
    source
        .expect_list_categories()
        .returning(|| Err(ClientError::NotFound("categories".into())));

    let (status, body) =
        get_json(app(source), &format!("/api/v1/budgets/progress?at={AT}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["budgets"][0]["category"], Value::Null);
}

#[tokio::test]
async fn test_get_progress_single_budget() {
    let groceries = sample_budgets().remove(0);
    let id = groceries.id;

    let mut source = MockSource::new();
    source
        .expect_get_budget()
        .withf(move |requested| *requested == id)
        .returning(move |_| Ok(groceries.clone()));
    source
        .expect_list_categories()
        .returning(|| Ok(vec![food()]));

    let (status, body) =
        get_json(app(source), &format!("/api/v1/budgets/{id}/progress?at={AT}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["budget"]["id"], id.to_string());
    assert_eq!(body["progress"]["alertTriggered"], true);
    assert_eq!(body["projection"]["willExceed"], true);
}

#[tokio::test]
async fn test_get_progress_not_found() {
    let mut source = MockSource::new();
    source
        .expect_get_budget()
        .returning(|id| Err(ClientError::NotFound(format!("budget {id}"))));

    let (status, body) = get_json(
        app(source),
        &format!("/api/v1/budgets/{}/progress", BudgetId::new()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let mut source = MockSource::new();
    source.expect_list_budgets().returning(|| {
        Err(ClientError::UnexpectedStatus {
            status: 500,
            body: "boom".into(),
        })
    });

    let (status, body) = get_json(app(source), "/api/v1/budgets/progress").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "EXTERNAL_SERVICE_ERROR");
}

#[tokio::test]
async fn test_rejected_service_token_is_bad_gateway() {
    let mut source = MockSource::new();
    source
        .expect_list_budgets()
        .returning(|| Err(ClientError::Unauthorized(401)));

    let (status, body) = get_json(app(source), "/api/v1/budgets/progress").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "EXTERNAL_SERVICE_ERROR");
}

#[tokio::test]
async fn test_huge_budget_does_not_take_down_list() {
    let huge = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
    let mut yearly = budget("Sovereign fund", huge, huge);
    yearly.period_kind = PeriodKind::Yearly;
    yearly.start_date = at() - TimeDelta::days(1);
    yearly.end_date = at() + TimeDelta::days(364);

    let (status, body) = get_json(
        app(source_with(vec![yearly.clone(), yearly])),
        &format!("/api/v1/budgets/progress?at={AT}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["budgets"][0]["projection"]["willExceed"], true);
    assert_eq!(
        decimal(&body["budgets"][0]["projection"]["projectedSpend"]),
        Decimal::MAX
    );
    assert_eq!(decimal(&body["overview"]["totalSpent"]), huge * Decimal::TWO);
}

#[tokio::test]
async fn test_invalid_query_is_validation_error() {
    let (status, body) = get_json(
        app(MockSource::new()),
        "/api/v1/budgets/progress?bucket=archived",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let (status, _) = get_json(
        app(MockSource::new()),
        "/api/v1/budgets/progress?at=yesterday",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_default_period_end() {
    let (status, body) = get_json(
        app(MockSource::new()),
        "/api/v1/periods/default-end?kind=quarterly&start=2026-01-31",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endDate"], "2026-04-30T00:00:00Z");

    let (status, body) = get_json(
        app(MockSource::new()),
        "/api/v1/periods/default-end?kind=custom&start=2026-01-31",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endDate"], Value::Null);
}
