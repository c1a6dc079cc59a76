//! Balance CLI command

use tokio::runtime::Runtime;

use crate::config::Settings;
use crate::error::ProfitFirstResult;
use crate::services::BalanceService;

use super::connect_provider;

/// Handle the balance command
pub fn handle_balance_command(runtime: &Runtime, settings: &Settings) -> ProfitFirstResult<()> {
    let service = BalanceService::new(connect_provider(settings)?);
    let balance = runtime.block_on(service.fetch())?;

    println!(
        "Available balance: {}",
        balance.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}
