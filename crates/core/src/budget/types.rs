//! Budget data types.

use budgetlens_shared::types::{BudgetId, CategoryId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date_format;

/// Alert threshold applied when the Budget Service omits one.
pub const DEFAULT_ALERT_THRESHOLD: u8 = 80;

/// Length of a budget period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Seven-day period.
    Weekly,
    /// One calendar month.
    Monthly,
    /// Three calendar months.
    Quarterly,
    /// Twelve calendar months.
    Yearly,
    /// Arbitrary user-chosen range.
    Custom,
}

/// A budget snapshot as supplied by the Budget Service.
///
/// This crate never writes budgets; every derived figure is recomputed from
/// these raw fields on each read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Display name.
    pub name: String,
    /// Budgeted limit for the period.
    pub amount: Decimal,
    /// Spend attributed to this budget so far.
    #[serde(default)]
    pub spent: Decimal,
    /// Period length.
    #[serde(alias = "period")]
    pub period_kind: PeriodKind,
    /// Start of the active period.
    #[serde(with = "date_format")]
    pub start_date: DateTime<Utc>,
    /// End of the active period.
    #[serde(with = "date_format")]
    pub end_date: DateTime<Utc>,
    /// Notification trigger percentage, independent of the status ladder.
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: u8,
    /// False when the budget is administratively paused.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// Category the budget tracks, resolved by the Category Service.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

fn default_alert_threshold() -> u8 {
    DEFAULT_ALERT_THRESHOLD
}

fn default_is_active() -> bool {
    true
}

/// Category display metadata from the Category Service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Display color, e.g. `#FF6B6B`.
    #[serde(default)]
    pub color: Option<String>,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Severity of a budget's spend, from the fixed 60/80/100 ladder.
///
/// Variants are declared in increasing severity so `Ord` follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Below 60% spent.
    Safe,
    /// At least 60% spent.
    Warning,
    /// At least 80% spent.
    Critical,
    /// At least 100% spent.
    Exceeded,
}

/// Mutually exclusive grouping used by budget list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterBucket {
    /// Running now.
    Active,
    /// Administratively paused, whatever its dates.
    Paused,
    /// Period already ended.
    Expired,
    /// Period not started yet.
    Future,
}

impl FilterBucket {
    /// All buckets, in list-view order.
    pub const ALL: [Self; 4] = [Self::Active, Self::Paused, Self::Expired, Self::Future];
}

/// Derived progress metrics for one budget at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    /// `spent / amount * 100`, unclamped; zero when the amount is zero.
    pub spent_percentage: Decimal,
    /// `amount - spent`; negative when overspent.
    pub remaining: Decimal,
    /// Whole days until the period ends, rounded up; zero or negative once ended.
    pub days_remaining: i64,
    /// `remaining / max(days_remaining, 1)`.
    pub daily_budget_remaining: Decimal,
    /// Ladder classification of `spent_percentage`.
    pub status: BudgetStatus,
    /// True once `spent_percentage` reaches the budget's alert threshold.
    pub alert_triggered: bool,
    /// `spent_percentage` clamped to `[0, 100]`, for progress-bar widths only.
    pub progress_bar_percentage: Decimal,
}

/// End-of-period spend projection from the current burn rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProjection {
    /// Average spend per elapsed day.
    pub daily_burn_rate: Decimal,
    /// Spend expected by the end of the period at the current burn rate.
    pub projected_spend: Decimal,
    /// Amount by which `projected_spend` exceeds the budget, never negative.
    pub projected_overspend: Decimal,
    /// True when `projected_spend` is above the budgeted amount.
    pub will_exceed: bool,
}
