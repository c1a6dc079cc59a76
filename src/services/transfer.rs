//! Transfer service
//!
//! A transfer is staged first (so the user can confirm it), then submitted to
//! the payment provider. Only a confirmed submission lands in the history.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{ProfitFirstError, ProfitFirstResult};
use crate::models::{Account, Money, TransactionHistory, TransactionRecord, TransferId};
use crate::provider::{PaymentProvider, TransferRequest};

/// A transfer awaiting confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransfer {
    /// Also used as the idempotency key
    pub id: TransferId,
    pub from: Account,
    pub to: Account,
    pub amount: Money,
}

impl PendingTransfer {
    /// The history entry this transfer becomes once confirmed
    fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            id: self.id,
            date: Utc::now(),
            from_account: self.from.name.clone(),
            to_account: self.to.name.clone(),
            amount: self.amount,
        }
    }
}

/// Service for staging and submitting transfers
#[derive(Clone)]
pub struct TransferService {
    provider: Arc<dyn PaymentProvider>,
    currency: String,
}

impl TransferService {
    pub fn new(provider: Arc<dyn PaymentProvider>, currency: impl Into<String>) -> Self {
        Self {
            provider,
            currency: currency.into(),
        }
    }

    /// Stage a transfer for confirmation
    ///
    /// The amount is rounded to cents here; NaN and infinities are refused.
    pub fn stage(&self, from: &Account, to: &Account, amount: f64) -> ProfitFirstResult<PendingTransfer> {
        if !to.can_receive_transfer() {
            return Err(ProfitFirstError::Validation(format!(
                "Cannot transfer into the {} account",
                to.name
            )));
        }
        if from.id == to.id {
            return Err(ProfitFirstError::Validation(
                "Source and destination accounts are the same".into(),
            ));
        }
        if !amount.is_finite() {
            return Err(ProfitFirstError::Validation(format!(
                "Transfer amount {} is not a number",
                amount
            )));
        }
        let amount = Money::from_dollars_f64(amount).ok_or_else(|| {
            ProfitFirstError::Validation(format!("Transfer amount {} is too large", amount))
        })?;

        Ok(PendingTransfer {
            id: TransferId::new(),
            from: from.clone(),
            to: to.clone(),
            amount,
        })
    }

    /// Submit a staged transfer without touching any history
    ///
    /// Split from [`confirm`](Self::confirm) so the TUI can run it on the
    /// runtime and record the result on the UI thread.
    pub async fn submit(&self, pending: &PendingTransfer) -> ProfitFirstResult<TransactionRecord> {
        let request = TransferRequest {
            idempotency_key: pending.id,
            from_account: pending.from.account_number.clone(),
            to_account: pending.to.account_number.clone(),
            amount: pending.amount.as_dollars_f64(),
            currency: self.currency.clone(),
        };

        tracing::info!(
            id = %pending.id,
            from = %pending.from.name,
            to = %pending.to.name,
            amount = %pending.amount,
            "submitting transfer"
        );

        match self.provider.submit_transfer(&request).await {
            Ok(()) => {
                tracing::info!(id = %pending.id, "transfer accepted");
                Ok(pending.to_record())
            }
            Err(e) => {
                tracing::warn!(id = %pending.id, error = %e, "transfer failed");
                Err(e)
            }
        }
    }

    /// Submit a staged transfer and record it on success
    ///
    /// Exactly one history entry is appended on success, none on failure.
    pub async fn confirm<'h>(
        &self,
        pending: &PendingTransfer,
        history: &'h mut TransactionHistory,
    ) -> ProfitFirstResult<&'h TransactionRecord> {
        let record = self.submit(pending).await?;
        Ok(history.append(record))
    }
}
