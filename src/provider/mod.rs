//! Payment provider seam
//!
//! Everything that talks to the outside world goes through [`PaymentProvider`],
//! so the services can be exercised against an in-memory fake in tests.

pub mod airwallex;
pub mod token;

pub use airwallex::AirwallexClient;
pub use token::ApiToken;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ProfitFirstResult;
use crate::models::TransferId;

/// Body of a transfer request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRequest {
    /// Sent as the `Idempotency-Key` header, not in the body
    #[serde(skip)]
    pub idempotency_key: TransferId,
    /// Source account number
    pub from_account: String,
    /// Destination account number
    pub to_account: String,
    /// Amount in dollars
    pub amount: f64,
    pub currency: String,
}

/// A payment provider able to report a balance and move money
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Available balance, in dollars
    async fn available_balance(&self) -> ProfitFirstResult<f64>;

    /// Submit a transfer. Succeeds only on a 2xx response.
    async fn submit_transfer(&self, request: &TransferRequest) -> ProfitFirstResult<()>;
}
