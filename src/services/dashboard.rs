//! Dashboard session
//!
//! State behind the allocation dashboard: the frozen registry, the income
//! being planned, the percentages, the session history and the last balance.
//! Allocations are never stored; they are derived whenever they are read.

use crate::error::{ProfitFirstError, ProfitFirstResult};
use crate::models::{
    Account, AccountRegistry, AllocationBreakdown, AllocationPercentages, Money,
    PercentageField, TransactionHistory, TransactionRecord, TransferRoutes,
};

use super::allocation::AllocationEngine;
use super::transfer::{PendingTransfer, TransferService};

/// One dashboard session
#[derive(Debug, Clone)]
pub struct Dashboard {
    registry: AccountRegistry,
    engine: AllocationEngine,
    income: f64,
    history: TransactionHistory,
    balance: Option<Money>,
}

impl Dashboard {
    pub fn new(
        registry: AccountRegistry,
        percentages: AllocationPercentages,
        routes: TransferRoutes,
    ) -> Self {
        Self {
            registry,
            engine: AllocationEngine::new(percentages, routes),
            income: 0.0,
            history: TransactionHistory::new(),
            balance: None,
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    /// Set the income figure; any value is accepted, including NaN
    pub fn set_income(&mut self, income: f64) {
        self.income = income;
    }

    pub fn percentages(&self) -> &AllocationPercentages {
        &self.engine.percentages
    }

    pub fn set_percentage(&mut self, field: PercentageField, value: f64) {
        self.engine.percentages.set(field, value);
    }

    /// Current allocations for the current income and percentages
    pub fn allocations(&self) -> AllocationBreakdown {
        self.engine.allocations(self.income)
    }

    /// Amount the given account should receive from the current income
    pub fn transfer_amount_for(&self, account: &Account) -> f64 {
        self.engine.transfer_amount_for(account, self.income)
    }

    /// Stage a transfer from the Income account into `to`
    pub fn stage_transfer_to(
        &self,
        transfers: &TransferService,
        to: &Account,
    ) -> ProfitFirstResult<PendingTransfer> {
        if self.registry.get(to.slot).map(|a| a.id) != Some(to.id) {
            return Err(ProfitFirstError::account_not_found(to.name.clone()));
        }
        transfers.stage(
            self.registry.source_account(),
            to,
            self.transfer_amount_for(to),
        )
    }

    /// Append a transfer the provider has accepted
    pub fn record_transfer(&mut self, record: TransactionRecord) -> &TransactionRecord {
        self.history.append(record)
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut TransactionHistory {
        &mut self.history
    }

    pub fn balance(&self) -> Option<Money> {
        self.balance
    }

    /// Replace the displayed balance after a successful check
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = Some(balance);
    }
}
