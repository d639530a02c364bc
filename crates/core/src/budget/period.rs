//! Budget period arithmetic.

use chrono::{DateTime, Months, TimeDelta, Utc};

use super::types::{Budget, PeriodKind};

/// Converts a signed duration to whole days, rounding toward positive infinity.
///
/// `-9.5` days becomes `-9`, `2.1` days becomes `3`, exact multiples are kept.
#[must_use]
pub fn ceil_days(delta: TimeDelta) -> i64 {
    // num_days truncates toward zero, which is already the ceiling below zero.
    let days = delta.num_days();
    if delta - TimeDelta::days(days) > TimeDelta::zero() {
        days + 1
    } else {
        days
    }
}

impl PeriodKind {
    /// Default period end for a budget starting at `start`.
    ///
    /// Returns `None` for [`PeriodKind::Custom`], which has no implied length,
    /// and when calendar arithmetic overflows.
    #[must_use]
    pub fn default_end(self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Weekly => start.checked_add_signed(TimeDelta::days(7)),
            Self::Monthly => start.checked_add_months(Months::new(1)),
            Self::Quarterly => start.checked_add_months(Months::new(3)),
            Self::Yearly => start.checked_add_months(Months::new(12)),
            Self::Custom => None,
        }
    }
}

impl Budget {
    /// Length of the budget period in days, rounded up and floored at 1.
    #[must_use]
    pub fn total_days(&self) -> i64 {
        ceil_days(self.end_date - self.start_date).max(1)
    }

    /// Days elapsed from the period start to `now` (capped at the period end),
    /// rounded up and floored at 1.
    #[must_use]
    pub fn elapsed_days(&self, now: DateTime<Utc>) -> i64 {
        let until = now.min(self.end_date);
        ceil_days(until - self.start_date).max(1)
    }
}
