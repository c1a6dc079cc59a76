//! Allocate CLI command
//!
//! Prints the allocation breakdown for an income figure and, once setup is
//! complete, what each account would receive.

use clap::Args;

use crate::config::Settings;
use crate::display::allocation::{format_allocation_table, format_transfer_plan};
use crate::error::{ProfitFirstError, ProfitFirstResult};
use crate::models::{AllocationPercentages, PercentageField};
use crate::services::AllocationEngine;
use crate::storage::Storage;

/// Arguments for `allocate`
#[derive(Args)]
pub struct AllocateArgs {
    /// Income to allocate, in dollars
    #[arg(allow_negative_numbers = true)]
    pub income: f64,
    /// GST percentage
    #[arg(long)]
    pub gst: Option<f64>,
    /// Service fee percentage
    #[arg(long)]
    pub service_fee: Option<f64>,
    /// Base revenue percentage
    #[arg(long)]
    pub base_revenue: Option<f64>,
    /// Contractor percentage (of base revenue)
    #[arg(long)]
    pub contractor: Option<f64>,
    /// Core percentage (of the service fee)
    #[arg(long)]
    pub core: Option<f64>,
    /// Vault percentage (of the service fee)
    #[arg(long)]
    pub vault: Option<f64>,
}

impl AllocateArgs {
    /// Settings percentages with any overrides applied
    pub fn percentages(&self, defaults: &AllocationPercentages) -> AllocationPercentages {
        let mut pcts = *defaults;
        let overrides = [
            (PercentageField::Gst, self.gst),
            (PercentageField::ServiceFee, self.service_fee),
            (PercentageField::BaseRevenue, self.base_revenue),
            (PercentageField::Contractor, self.contractor),
            (PercentageField::Core, self.core),
            (PercentageField::Vault, self.vault),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                pcts.set(field, value);
            }
        }
        pcts
    }
}

/// Handle the allocate command
pub fn handle_allocate_command(
    storage: &Storage,
    settings: &Settings,
    args: AllocateArgs,
) -> ProfitFirstResult<()> {
    let engine = AllocationEngine::new(
        args.percentages(&settings.percentages),
        settings.transfer_routes.clone(),
    );
    let symbol = &settings.currency_symbol;

    print!(
        "{}",
        format_allocation_table(args.income, &engine.allocations(args.income), symbol)
    );

    match storage.accounts.registry() {
        Ok(registry) => {
            println!();
            print!("{}", format_transfer_plan(&registry, &engine, args.income, symbol));
        }
        Err(ProfitFirstError::SetupRequired) => {
            println!();
            println!("Complete account setup to see per-account transfers.");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let args = AllocateArgs {
            income: 1000.0,
            gst: Some(15.0),
            service_fee: None,
            base_revenue: None,
            contractor: None,
            core: Some(50.0),
            vault: None,
        };
        let pcts = args.percentages(&AllocationPercentages::default());
        assert_eq!(pcts.gst, 15.0);
        assert_eq!(pcts.core, 50.0);
        assert_eq!(pcts.vault, 40.0);
    }
}
