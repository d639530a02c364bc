//! Budget progress engine.
//!
//! Turns a budget snapshot plus a reference instant into derived metrics.
//! Every function here is pure: no I/O, no hidden state, no errors. The
//! reference instant is always an explicit argument except in the `*_now`
//! convenience wrappers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::period::ceil_days;
use super::types::{Budget, BudgetProgress, BudgetProjection, BudgetStatus, FilterBucket};

/// Spent percentage at which a budget becomes [`BudgetStatus::Warning`].
pub const WARNING_PERCENT: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Spent percentage at which a budget becomes [`BudgetStatus::Critical`].
pub const CRITICAL_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Spent percentage at which a budget becomes [`BudgetStatus::Exceeded`].
pub const EXCEEDED_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Money figures in projections are rounded to this many decimal places.
const MONEY_DP: u32 = 2;

/// Budget progress engine.
pub struct ProgressEngine;

impl ProgressEngine {
    /// Computes the derived progress metrics of `budget` as of `now`.
    ///
    /// - `spent_percentage` is `spent / amount * 100`, or zero when the amount
    ///   is not positive. It is not clamped.
    /// - `days_remaining` is the ceiling of the days between `now` and the
    ///   period end, so it goes to zero and then negative once the period is over.
    /// - `daily_budget_remaining` divides `remaining` by `days_remaining`
    ///   floored at one day.
    #[must_use]
    pub fn compute_progress(budget: &Budget, now: DateTime<Utc>) -> BudgetProgress {
        let spent_percentage = Self::spent_percentage(budget.amount, budget.spent);
        let remaining = budget.amount.saturating_sub(budget.spent);
        let days_remaining = ceil_days(budget.end_date - now);
        let daily_budget_remaining = remaining / Decimal::from(days_remaining.max(1));

        BudgetProgress {
            spent_percentage,
            remaining,
            days_remaining,
            daily_budget_remaining,
            status: Self::status_for(spent_percentage),
            alert_triggered: spent_percentage >= Decimal::from(budget.alert_threshold),
            progress_bar_percentage: spent_percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
        }
    }

    /// [`Self::compute_progress`] against the wall clock.
    #[must_use]
    pub fn compute_progress_now(budget: &Budget) -> BudgetProgress {
        Self::compute_progress(budget, Utc::now())
    }

    /// Classifies `budget` into a list-view bucket as of `now`.
    ///
    /// Pause state wins over dates: an inactive budget is always
    /// [`FilterBucket::Paused`].
    #[must_use]
    pub fn classify_filter_bucket(budget: &Budget, now: DateTime<Utc>) -> FilterBucket {
        if !budget.is_active {
            FilterBucket::Paused
        } else if budget.end_date < now {
            FilterBucket::Expired
        } else if budget.start_date > now {
            FilterBucket::Future
        } else {
            FilterBucket::Active
        }
    }

    /// [`Self::classify_filter_bucket`] against the wall clock.
    #[must_use]
    pub fn classify_filter_bucket_now(budget: &Budget) -> FilterBucket {
        Self::classify_filter_bucket(budget, Utc::now())
    }

    /// Maps a spent percentage onto the fixed status ladder.
    #[must_use]
    pub fn status_for(spent_percentage: Decimal) -> BudgetStatus {
        if spent_percentage >= EXCEEDED_PERCENT {
            BudgetStatus::Exceeded
        } else if spent_percentage >= CRITICAL_PERCENT {
            BudgetStatus::Critical
        } else if spent_percentage >= WARNING_PERCENT {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Safe
        }
    }

    /// `spent / amount * 100`; zero when `amount` is not positive.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing when `amount` is tiny.
    #[must_use]
    pub fn spent_percentage(amount: Decimal, spent: Decimal) -> Decimal {
        if amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        spent
            .checked_div(amount)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    }

    /// Projects end-of-period spend from the average daily spend so far.
    ///
    /// Elapsed days are capped at the period end and floored at one, so a
    /// budget that has not started yet projects from a single day.
    ///
    /// Saturates at `Decimal::MAX` when the projection does not fit.
    #[must_use]
    pub fn project_spend(budget: &Budget, now: DateTime<Utc>) -> BudgetProjection {
        let elapsed = Decimal::from(budget.elapsed_days(now));
        let total = Decimal::from(budget.total_days());

        let burn = budget.spent / elapsed;
        let projected_spend = budget
            .spent
            .checked_mul(total)
            .map_or_else(|| burn.saturating_mul(total), |scaled| scaled / elapsed)
            .round_dp(MONEY_DP);
        let daily_burn_rate = burn.round_dp(MONEY_DP);
        let projected_overspend = projected_spend
            .saturating_sub(budget.amount)
            .max(Decimal::ZERO);

        BudgetProjection {
            daily_burn_rate,
            projected_spend,
            projected_overspend,
            will_exceed: projected_spend > budget.amount,
        }
    }
}
