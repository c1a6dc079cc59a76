//! Balance check service

use std::sync::Arc;

use crate::error::{ProfitFirstError, ProfitFirstResult};
use crate::models::Money;
use crate::provider::PaymentProvider;

/// Service for querying the available balance
#[derive(Clone)]
pub struct BalanceService {
    provider: Arc<dyn PaymentProvider>,
}

impl BalanceService {
    pub fn new(provider: Arc<dyn PaymentProvider>) -> Self {
        Self { provider }
    }

    /// Query the provider once
    pub async fn fetch(&self) -> ProfitFirstResult<Money> {
        let balance = self.provider.available_balance().await.map_err(|e| {
            tracing::warn!(error = %e, "balance check failed");
            e
        })?;

        let balance = Money::from_dollars_f64(balance).ok_or_else(|| {
            ProfitFirstError::balance_failed(format!("Provider returned {}", balance))
        })?;
        tracing::info!(%balance, "balance checked");
        Ok(balance)
    }

    /// Query the provider and store the result in `current`
    ///
    /// On failure `current` keeps its previous value.
    pub async fn check(&self, current: &mut Option<Money>) -> ProfitFirstResult<Money> {
        let balance = self.fetch().await?;
        *current = Some(balance);
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fake::FakeProvider;

    #[tokio::test]
    async fn test_check_updates_value() {
        let service = BalanceService::new(Arc::new(FakeProvider::with_balance(1520.75)));
        let mut current = None;

        let balance = service.check(&mut current).await.unwrap();
        assert_eq!(balance, Money::from_cents(152075));
        assert_eq!(current, Some(balance));
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_value() {
        let service = BalanceService::new(Arc::new(FakeProvider::default()));
        let mut current = Some(Money::from_cents(500));

        let err = service.check(&mut current).await.unwrap_err();
        assert!(err.is_external());
        assert_eq!(current, Some(Money::from_cents(500)));
    }

    #[tokio::test]
    async fn test_non_finite_balance_is_failure() {
        let service = BalanceService::new(Arc::new(FakeProvider::with_balance(f64::INFINITY)));
        let mut current = None;

        assert!(service.check(&mut current).await.unwrap_err().is_external());
        assert_eq!(current, None);
    }
}
