//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod allocate;
pub mod balance;
pub mod setup;
pub mod transfer;

pub use account::{handle_account_command, AccountCommands};
pub use allocate::{handle_allocate_command, AllocateArgs};
pub use balance::handle_balance_command;
pub use setup::{handle_setup_command, SetupCommands};
pub use transfer::{handle_transfer_command, TransferArgs};

use std::sync::Arc;

use crate::config::Settings;
use crate::error::ProfitFirstResult;
use crate::provider::{AirwallexClient, ApiToken, PaymentProvider};

/// Build the payment provider, asking for the API token if it isn't in the environment
pub fn connect_provider(settings: &Settings) -> ProfitFirstResult<Arc<dyn PaymentProvider>> {
    let token = ApiToken::resolve()?;
    Ok(Arc::new(AirwallexClient::new(&settings.provider, token)?))
}
