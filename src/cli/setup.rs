//! Setup CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::account::format_account_list;
use crate::error::ProfitFirstResult;
use crate::services::SetupService;
use crate::storage::Storage;

/// Setup subcommands
#[derive(Subcommand)]
pub enum SetupCommands {
    /// Show whether setup is complete and what is missing
    Status,
    /// Validate all accounts and lock them in
    Complete,
    /// Reopen setup so bank details can be changed
    Reset,
    /// Load bank details from a YAML or JSON file
    Import {
        /// Path to the file
        file: PathBuf,
    },
}

/// Handle a setup command
pub fn handle_setup_command(storage: &Storage, cmd: SetupCommands) -> ProfitFirstResult<()> {
    let service = SetupService::new(storage);

    match cmd {
        SetupCommands::Status => {
            let status = service.status()?;
            if status.completed {
                println!("Setup is complete.");
            } else {
                println!("Setup is in progress.");
                let incomplete = status.incomplete();
                if incomplete.is_empty() {
                    println!("All details entered. Run 'profitfirst setup complete' to finish.");
                } else {
                    for (account, field) in incomplete {
                        println!("  {}: {} is empty", account.name, field);
                    }
                }
            }
            println!();
            print!("{}", format_account_list(&status.accounts));
        }

        SetupCommands::Complete => {
            let registry = service.complete()?;
            println!("Setup complete. {} accounts saved.", registry.len());
        }

        SetupCommands::Reset => {
            service.reset()?;
            println!("Setup reopened. Edit accounts with 'profitfirst account set'.");
        }

        SetupCommands::Import { file } => {
            let changed = service.import_file(&file)?;
            println!("Imported bank details for {} account(s):", changed.len());
            for account in changed {
                println!("  {}", account.name);
            }
        }
    }

    Ok(())
}
