//! Response decoding and boundary validation.
//!
//! The Budget Service returns either bare JSON or the same payload wrapped in
//! `{ "data": ... }`. Budgets are validated here, as they cross into the
//! application, so the progress engine never has to.

use budgetlens_core::budget::{Budget, Category};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ClientError;

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

fn unwrap_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    let envelope: Envelope<T> = serde_json::from_slice(body)?;
    Ok(envelope.into_inner())
}

fn checked(budget: Budget) -> Result<Budget, ClientError> {
    match budget.validate() {
        Ok(()) => Ok(budget),
        Err(source) => {
            warn!(budget_id = %budget.id, error = %source, "Rejecting invalid budget record");
            Err(ClientError::InvalidRecord {
                id: budget.id,
                source,
            })
        }
    }
}

/// Decodes and validates a budget list.
///
/// # Errors
///
/// Fails on malformed JSON or on the first budget that breaks an invariant.
pub fn decode_budgets(body: &[u8]) -> Result<Vec<Budget>, ClientError> {
    unwrap_envelope::<Vec<Budget>>(body)?
        .into_iter()
        .map(checked)
        .collect()
}

/// Decodes and validates a single budget.
///
/// # Errors
///
/// Fails on malformed JSON or when the budget breaks an invariant.
pub fn decode_budget(body: &[u8]) -> Result<Budget, ClientError> {
    checked(unwrap_envelope(body)?)
}

/// Decodes a category list.
///
/// # Errors
///
/// Fails on malformed JSON.
pub fn decode_categories(body: &[u8]) -> Result<Vec<Category>, ClientError> {
    unwrap_envelope(body)
}
