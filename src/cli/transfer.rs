//! Transfer CLI command
//!
//! Stages a transfer out of the Income account, asks for confirmation, then
//! submits it. History only lasts for this one invocation.

use std::io::{self, BufRead, Write};

use clap::{ArgGroup, Args};
use tokio::runtime::Runtime;

use crate::config::Settings;
use crate::display::history::format_record;
use crate::error::{ProfitFirstError, ProfitFirstResult};
use crate::models::TransactionHistory;
use crate::services::{AllocationEngine, TransferService};
use crate::storage::Storage;

use super::connect_provider;

/// Arguments for `transfer`
#[derive(Args)]
#[command(group(ArgGroup::new("how_much").required(true).args(["income", "amount"])))]
pub struct TransferArgs {
    /// Destination account name or key
    pub to: String,
    /// Income figure; the amount is whatever is routed to the destination
    #[arg(long)]
    pub income: Option<f64>,
    /// Explicit amount in dollars
    #[arg(long)]
    pub amount: Option<f64>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Handle the transfer command
pub fn handle_transfer_command(
    runtime: &Runtime,
    storage: &Storage,
    settings: &Settings,
    args: TransferArgs,
) -> ProfitFirstResult<()> {
    let registry = storage.accounts.registry()?;
    let to = registry
        .find(&args.to)
        .ok_or_else(|| ProfitFirstError::account_not_found(&args.to))?
        .clone();
    let from = registry.source_account();

    let amount = match (args.amount, args.income) {
        (Some(amount), _) => amount,
        (None, Some(income)) => {
            let engine = AllocationEngine::new(settings.percentages, settings.transfer_routes.clone());
            engine.transfer_amount_for(&to, income)
        }
        (None, None) => {
            return Err(ProfitFirstError::Validation(
                "Pass either --income or --amount".into(),
            ))
        }
    };

    let service = TransferService::new(connect_provider(settings)?, settings.provider.currency.clone());
    let pending = service.stage(from, &to, amount)?;

    let symbol = &settings.currency_symbol;
    if !args.yes {
        let question = format!(
            "Transfer {} from {} to {}?",
            pending.amount.format_with_symbol(symbol),
            pending.from.name,
            pending.to.name
        );
        if !confirm(&question)? {
            println!("Transfer cancelled.");
            return Ok(());
        }
    }

    let mut history = TransactionHistory::new();
    let record = runtime.block_on(service.confirm(&pending, &mut history))?;
    println!("Transfer initiated successfully.");
    println!("  {}", format_record(record, symbol));

    Ok(())
}

/// Ask a yes/no question on stdin; anything but "y"/"yes" is a no
fn confirm(question: &str) -> ProfitFirstResult<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
