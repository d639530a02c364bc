//! Collaborator interface for budget and category data.

use async_trait::async_trait;
use budgetlens_core::budget::{Budget, Category};
use budgetlens_shared::types::BudgetId;

use crate::error::ClientError;

/// Read access to the Budget Service and Category Service.
///
/// The Budget Service is the only writer of budget records; implementors
/// hand out snapshots and make no freshness guarantee.
#[async_trait]
pub trait BudgetSource: Send + Sync {
    /// Lists every budget visible to the caller.
    async fn list_budgets(&self) -> Result<Vec<Budget>, ClientError>;

    /// Fetches one budget.
    async fn get_budget(&self, id: BudgetId) -> Result<Budget, ClientError>;

    /// Lists category display metadata.
    async fn list_categories(&self) -> Result<Vec<Category>, ClientError>;
}
