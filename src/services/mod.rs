//! Service layer for ProfitFirst
//!
//! Business logic on top of the models, storage and payment provider:
//! setup validation, allocation and routing, transfers, balance checks, and
//! the dashboard session that ties them together.

pub mod allocation;
pub mod balance;
pub mod dashboard;
pub mod setup;
pub mod transfer;

pub use allocation::{calculate_allocations, AllocationEngine};
pub use balance::BalanceService;
pub use dashboard::Dashboard;
pub use setup::{BankDetailsUpdate, SetupService, SetupStatus};
pub use transfer::{PendingTransfer, TransferService};
