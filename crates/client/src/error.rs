//! Client error types.

use budgetlens_core::budget::BudgetError;
use budgetlens_shared::AppError;
use budgetlens_shared::types::BudgetId;
use thiserror::Error;

/// Errors talking to the Budget Service or Category Service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, timeout, or unreadable body.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The service rejected our credentials.
    #[error("Budget Service rejected credentials (HTTP {0})")]
    Unauthorized(u16),

    /// Any other non-success status.
    #[error("Budget Service returned HTTP {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The body was not the JSON shape we expect.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A budget record decoded but broke a record invariant.
    #[error("Invalid budget {id}: {source}")]
    InvalidRecord {
        /// Offending budget.
        id: BudgetId,
        /// Violated invariant.
        #[source]
        source: BudgetError,
    },
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(what) => Self::NotFound(what),
            ClientError::InvalidRecord { .. } => Self::Validation(err.to_string()),
            // Our own service token was refused, not the caller's credentials.
            ClientError::Unauthorized(_)
            | ClientError::Http(_)
            | ClientError::UnexpectedStatus { .. }
            | ClientError::Decode(_) => Self::ExternalService(err.to_string()),
        }
    }
}
