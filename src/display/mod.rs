//! Display formatting for terminal output
//!
//! Plain-text tables for the CLI commands.

pub mod account;
pub mod allocation;
pub mod history;

pub use account::{format_account_details, format_account_list};
pub use allocation::{format_allocation_table, format_transfer_plan};
pub use history::{format_history, format_record};
