//! Budget error types.

use budgetlens_shared::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a budget record from the Budget Service is rejected.
///
/// Raised only at the deserialization boundary; the progress engine itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Name is blank.
    #[error("Budget name cannot be empty")]
    EmptyName,

    /// Amount cannot be negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Spent cannot be negative.
    #[error("Spent cannot be negative: {0}")]
    NegativeSpent(Decimal),

    /// Period does not end after it starts.
    #[error("Budget period must end after it starts: {start} >= {end}")]
    InvalidPeriod {
        /// Period start.
        start: DateTime<Utc>,
        /// Period end.
        end: DateTime<Utc>,
    },

    /// Alert threshold is not a percentage.
    #[error("Alert threshold must be between 0 and 100, got {0}")]
    ThresholdOutOfRange(u8),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        Self::Validation(err.to_string())
    }
}
