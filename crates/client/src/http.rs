//! `reqwest` implementation of [`BudgetSource`].

use std::time::Duration;

use async_trait::async_trait;
use budgetlens_core::budget::{Budget, Category};
use budgetlens_shared::BudgetServiceConfig;
use budgetlens_shared::types::BudgetId;
use reqwest::StatusCode;
use tracing::{debug, error};

use crate::decode::{decode_budget, decode_budgets, decode_categories};
use crate::error::ClientError;
use crate::source::BudgetSource;

/// Longest upstream error body kept in [`ClientError::UnexpectedStatus`].
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for the Budget Service REST API.
#[derive(Clone)]
pub struct HttpBudgetClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpBudgetClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: &BudgetServiceConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `path` and returns the body of a successful response.
    async fn fetch(&self, path: &str, what: &str) -> Result<Vec<u8>, ClientError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "Budget Service request");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.bytes().await?.to_vec());
        }

        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(what.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ClientError::Unauthorized(status.as_u16()))
            }
            _ => {
                let mut body = response.text().await.unwrap_or_default();
                if body.len() > MAX_ERROR_BODY {
                    let mut cut = MAX_ERROR_BODY;
                    while !body.is_char_boundary(cut) {
                        cut -= 1;
                    }
                    body.truncate(cut);
                }
                error!(%url, status = status.as_u16(), "Budget Service request failed");
                Err(ClientError::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[async_trait]
impl BudgetSource for HttpBudgetClient {
    async fn list_budgets(&self) -> Result<Vec<Budget>, ClientError> {
        let body = self.fetch("/budgets", "budgets").await?;
        let budgets = decode_budgets(&body)?;
        debug!(count = budgets.len(), "Fetched budgets");
        Ok(budgets)
    }

    async fn get_budget(&self, id: BudgetId) -> Result<Budget, ClientError> {
        let body = self
            .fetch(&format!("/budgets/{id}"), &format!("budget {id}"))
            .await?;
        decode_budget(&body)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let body = self.fetch("/categories", "categories").await?;
        decode_categories(&body)
    }
}
