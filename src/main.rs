use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use profitfirst::cli::{
    handle_account_command, handle_allocate_command, handle_balance_command,
    handle_setup_command, handle_transfer_command, AllocateArgs, TransferArgs,
};
use profitfirst::config::{paths::ProfitFirstPaths, settings::Settings};
use profitfirst::provider::{AirwallexClient, ApiToken, PaymentProvider};
use profitfirst::storage::Storage;

#[derive(Parser)]
#[command(
    name = "profitfirst",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based Profit First revenue allocation",
    long_about = "ProfitFirst splits incoming revenue across your Profit First \
                  bank accounts by percentage and initiates the transfers \
                  through your payment provider."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Account commands
    #[command(subcommand)]
    Account(profitfirst::cli::AccountCommands),

    /// Account setup lifecycle
    #[command(subcommand)]
    Setup(profitfirst::cli::SetupCommands),

    /// Show the allocation breakdown for an income figure
    Allocate(AllocateArgs),

    /// Check the available balance with the payment provider
    Balance,

    /// Transfer from the Income account to another account
    Transfer(TransferArgs),

    /// Create the configuration and blank accounts
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ProfitFirstPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    if !matches!(cli.command, Some(Commands::Tui)) {
        profitfirst::logging::init_stderr();
    }

    match cli.command {
        Some(Commands::Tui) => {
            profitfirst::logging::init_file(&paths.log_file())?;
            let runtime = Runtime::new()?;
            let provider = tui_provider(&settings);
            profitfirst::tui::run_tui(&storage, &settings, runtime.handle().clone(), provider)?;
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, cmd)?;
        }
        Some(Commands::Setup(cmd)) => {
            handle_setup_command(&storage, cmd)?;
        }
        Some(Commands::Allocate(args)) => {
            handle_allocate_command(&storage, &settings, args)?;
        }
        Some(Commands::Balance) => {
            let runtime = Runtime::new()?;
            handle_balance_command(&runtime, &settings)?;
        }
        Some(Commands::Transfer(args)) => {
            let runtime = Runtime::new()?;
            handle_transfer_command(&runtime, &storage, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing ProfitFirst at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Six accounts have been created: Income, GST, Profit, Tax, Owner's Pay, Expenses.");
            println!("Fill in their bank details with 'profitfirst account set' or 'profitfirst tui'.");
        }
        Some(Commands::Config) => {
            println!("ProfitFirst Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Accounts file:    {}", paths.accounts_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Provider URL:   {}", settings.provider.base_url);
            println!("  Timeout:        {}s", settings.provider.request_timeout_secs);
            println!("  Currency:       {}", settings.provider.currency);
            let p = &settings.percentages;
            println!(
                "  Percentages:    GST {}%, Service Fee {}%, Base Revenue {}%, Contractor {}%, Core {}%, Vault {}%",
                p.gst, p.service_fee, p.base_revenue, p.contractor, p.core, p.vault
            );
            for (slot, kind) in settings.transfer_routes.iter() {
                println!("  Route:          {} <- {}", slot, kind);
            }
        }
        None => {
            println!("ProfitFirst - Terminal-based Profit First allocation");
            println!();
            println!("Run 'profitfirst --help' for usage information.");
            println!("Run 'profitfirst tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Provider for the TUI; without a token the UI still runs but can't reach the API
fn tui_provider(settings: &Settings) -> Option<Arc<dyn PaymentProvider>> {
    let provider = ApiToken::resolve()
        .and_then(|token| AirwallexClient::new(&settings.provider, token));

    match provider {
        Ok(client) => Some(Arc::new(client) as Arc<dyn PaymentProvider>),
        Err(e) => {
            tracing::warn!(error = %e, "payment provider unavailable");
            None
        }
    }
}
