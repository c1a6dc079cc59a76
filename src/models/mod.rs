//! Core data models for ProfitFirst
//!
//! Accounts and the registry they are frozen into, allocation percentages and
//! their derived breakdown, money, and the session transaction history.

pub mod account;
pub mod allocation;
pub mod history;
pub mod ids;
pub mod money;
pub mod registry;

pub use account::{Account, AccountSlot, AccountType, BankField};
pub use allocation::{
    Allocation, AllocationBreakdown, AllocationKind, AllocationPercentages, PercentageField,
    TransferRoutes,
};
pub use history::{TransactionHistory, TransactionRecord};
pub use ids::{AccountId, TransferId};
pub use money::Money;
pub use registry::AccountRegistry;
