//! Budget progress tracking.
//!
//! This module implements the budget read model:
//! - Budget snapshots and category metadata
//! - Progress engine (spent percentage, status ladder, filter buckets)
//! - Period arithmetic and end-of-period projection
//! - Boundary validation for records from the Budget Service
//! - List overviews

pub mod date_format;
pub mod engine;
pub mod error;
pub mod period;
pub mod summary;
pub mod types;
pub mod validation;


pub use engine::{CRITICAL_PERCENT, EXCEEDED_PERCENT, ProgressEngine, WARNING_PERCENT};
pub use error::BudgetError;
pub use period::ceil_days;
pub use summary::{BucketCounts, BudgetOverview, StatusCounts, filter_by_bucket};
pub use types::{
    Budget, BudgetProgress, BudgetProjection, BudgetStatus, Category, DEFAULT_ALERT_THRESHOLD,
    FilterBucket, PeriodKind,
};
