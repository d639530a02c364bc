//! Budget list overviews.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::engine::ProgressEngine;
use super::types::{Budget, BudgetStatus, FilterBucket};

/// Count of budgets per filter bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    /// Running budgets.
    pub active: usize,
    /// Paused budgets.
    pub paused: usize,
    /// Ended budgets.
    pub expired: usize,
    /// Not-yet-started budgets.
    pub future: usize,
}

impl BucketCounts {
    fn record(&mut self, bucket: FilterBucket) {
        match bucket {
            FilterBucket::Active => self.active += 1,
            FilterBucket::Paused => self.paused += 1,
            FilterBucket::Expired => self.expired += 1,
            FilterBucket::Future => self.future += 1,
        }
    }
}

/// Count of active budgets per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Below 60%.
    pub safe: usize,
    /// 60% and above.
    pub warning: usize,
    /// 80% and above.
    pub critical: usize,
    /// 100% and above.
    pub exceeded: usize,
}

impl StatusCounts {
    fn record(&mut self, status: BudgetStatus) {
        match status {
            BudgetStatus::Safe => self.safe += 1,
            BudgetStatus::Warning => self.warning += 1,
            BudgetStatus::Critical => self.critical += 1,
            BudgetStatus::Exceeded => self.exceeded += 1,
        }
    }
}

/// Aggregate view over a list of budgets.
///
/// Money totals and status counts cover the active bucket only; paused,
/// expired and future budgets are counted in `buckets` and nowhere else.
/// Money totals saturate at the `Decimal` bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    /// Sum of active budget amounts.
    pub total_amount: Decimal,
    /// Sum of active budget spend.
    pub total_spent: Decimal,
    /// `total_amount - total_spent`.
    pub total_remaining: Decimal,
    /// `total_spent / total_amount * 100`, zero when nothing is budgeted.
    pub utilization_percentage: Decimal,
    /// Budgets per filter bucket.
    pub buckets: BucketCounts,
    /// Active budgets per status.
    pub statuses: StatusCounts,
    /// Active budgets whose alert threshold has been reached.
    pub alerts_triggered: usize,
}

impl BudgetOverview {
    /// Builds the overview of `budgets` as of `now`.
    #[must_use]
    pub fn build(budgets: &[Budget], now: DateTime<Utc>) -> Self {
        let mut total_amount = Decimal::ZERO;
        let mut total_spent = Decimal::ZERO;
        let mut buckets = BucketCounts::default();
        let mut statuses = StatusCounts::default();
        let mut alerts_triggered = 0;

        for budget in budgets {
            let bucket = ProgressEngine::classify_filter_bucket(budget, now);
            buckets.record(bucket);

            if bucket != FilterBucket::Active {
                continue;
            }

            let progress = ProgressEngine::compute_progress(budget, now);
            statuses.record(progress.status);
            if progress.alert_triggered {
                alerts_triggered += 1;
            }

            total_amount = total_amount.saturating_add(budget.amount);
            total_spent = total_spent.saturating_add(budget.spent);
        }

        Self {
            total_amount,
            total_spent,
            total_remaining: total_amount.saturating_sub(total_spent),
            utilization_percentage: ProgressEngine::spent_percentage(total_amount, total_spent)
                .round_dp(2),
            buckets,
            statuses,
            alerts_triggered,
        }
    }
}

/// Budgets in `bucket` as of `now`, in input order.
#[must_use]
pub fn filter_by_bucket<'a>(
    budgets: &'a [Budget],
    bucket: FilterBucket,
    now: DateTime<Utc>,
) -> Vec<&'a Budget> {
    budgets
        .iter()
        .filter(|budget| ProgressEngine::classify_filter_bucket(budget, now) == bucket)
        .collect()
}
