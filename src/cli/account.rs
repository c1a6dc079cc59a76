//! Account CLI commands
//!
//! Listing the six accounts and editing their bank details during setup.

use clap::Subcommand;

use crate::display::account::{format_account_details, format_account_list};
use crate::error::{ProfitFirstError, ProfitFirstResult};
use crate::services::{BankDetailsUpdate, SetupService};
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List all accounts and their bank details
    List,
    /// Show one account
    Show {
        /// Account name or key (e.g. "Owner's Pay" or owners_pay)
        account: String,
    },
    /// Set bank details on an account (only while setup is open)
    Set {
        /// Account name or key
        account: String,
        /// BSB
        #[arg(long)]
        bsb: Option<String>,
        /// Account number
        #[arg(long)]
        number: Option<String>,
        /// Bank name
        #[arg(long)]
        bank: Option<String>,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, cmd: AccountCommands) -> ProfitFirstResult<()> {
    let service = SetupService::new(storage);

    match cmd {
        AccountCommands::List => {
            print!("{}", format_account_list(&service.drafts()?));
        }

        AccountCommands::Show { account } => {
            let found = storage
                .accounts
                .find(&account)?
                .ok_or_else(|| ProfitFirstError::account_not_found(&account))?;
            print!("{}", format_account_details(&found));
        }

        AccountCommands::Set {
            account,
            bsb,
            number,
            bank,
        } => {
            let update = BankDetailsUpdate {
                bsb,
                account_number: number,
                bank_name: bank,
            };
            let updated = service.update_bank_details(&account, &update)?;
            println!("Updated account: {}", updated.name);
            if let Some(field) = updated.missing_field() {
                println!("  Still missing: {}", field);
            }
        }
    }

    Ok(())
}
