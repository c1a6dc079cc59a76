//! HTTP payment provider client
//!
//! Two bearer-authenticated endpoints under the configured base URL:
//! `GET /accounts/balance` and `POST /transfers`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use super::token::ApiToken;
use super::{PaymentProvider, TransferRequest};
use crate::config::ProviderSettings;
use crate::error::{ProfitFirstError, ProfitFirstResult};

const BALANCE_PATH: &str = "/accounts/balance";
const TRANSFERS_PATH: &str = "/transfers";
const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

#[derive(Debug, Deserialize)]
struct BalanceResponse {
    available_balance: f64,
}

/// Payment provider client over HTTPS
pub struct AirwallexClient {
    client: Client,
    base_url: String,
    token: ApiToken,
}

impl AirwallexClient {
    /// Build a client with the configured timeout
    pub fn new(settings: &ProviderSettings, token: ApiToken) -> ProfitFirstResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| ProfitFirstError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-2xx response into a readable reason
async fn error_reason(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    format!("HTTP {}: {}", status, body.trim())
}

fn parse_balance(body: &str) -> ProfitFirstResult<f64> {
    serde_json::from_str::<BalanceResponse>(body)
        .map(|b| b.available_balance)
        .map_err(|e| ProfitFirstError::balance_failed(format!("Unexpected response: {}", e)))
}

#[async_trait]
impl PaymentProvider for AirwallexClient {
    async fn available_balance(&self) -> ProfitFirstResult<f64> {
        let url = self.url(BALANCE_PATH);
        tracing::debug!(%url, "GET balance");

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.token.expose())
            .send()
            .await
            .map_err(|e| ProfitFirstError::balance_failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProfitFirstError::balance_failed(error_reason(response).await));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProfitFirstError::balance_failed(e.to_string()))?;
        parse_balance(&body)
    }

    async fn submit_transfer(&self, request: &TransferRequest) -> ProfitFirstResult<()> {
        let url = self.url(TRANSFERS_PATH);
        tracing::debug!(%url, key = %request.idempotency_key.as_uuid(), "POST transfer");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token.expose())
            .header(IDEMPOTENCY_HEADER, request.idempotency_key.as_uuid().to_string())
            .json(request)
            .send()
            .await
            .map_err(|e| ProfitFirstError::transfer_failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProfitFirstError::transfer_failed(error_reason(response).await));
        }

        Ok(())
    }
}
