//! Allocation display formatting

use crate::models::money::format_amount;
use crate::models::{AccountRegistry, AllocationBreakdown};
use crate::services::AllocationEngine;

/// Format the five allocations as a table
pub fn format_allocation_table(income: f64, breakdown: &AllocationBreakdown, symbol: &str) -> String {
    let mut output = format!("Income: {}\n\n", format_amount(income, symbol));

    output.push_str(&format!("{:<12}  {:>8}  {:>14}\n", "Allocation", "Percent", "Amount"));
    output.push_str(&format!("{:-<12}  {:->8}  {:->14}\n", "", "", ""));

    for allocation in breakdown.iter() {
        output.push_str(&format!(
            "{:<12}  {:>7}%  {:>14}\n",
            allocation.name(),
            allocation.percentage,
            format_amount(allocation.amount, symbol),
        ));
    }

    output
}

/// Format what each account would receive from this income
pub fn format_transfer_plan(
    registry: &AccountRegistry,
    engine: &AllocationEngine,
    income: f64,
    symbol: &str,
) -> String {
    let mut output = String::from("Transfers from Income:\n");

    for account in registry.accounts().iter().filter(|a| a.can_receive_transfer()) {
        let source = engine
            .route_for(account)
            .map(|kind| kind.name())
            .unwrap_or("not routed");
        output.push_str(&format!(
            "  {:<12}  {:>14}  ({})\n",
            account.name,
            format_amount(engine.transfer_amount_for(account, income), symbol),
            source,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registry::tests::test_registry;
    use crate::models::AllocationPercentages;
    use crate::services::calculate_allocations;

    #[test]
    fn test_table_reference_figures() {
        let breakdown = calculate_allocations(1000.0, &AllocationPercentages::default());
        let output = format_allocation_table(1000.0, &breakdown, "$");

        assert!(output.contains("Income: $1000.00"));
        for expected in ["$100.00", "$50.00", "$595.00", "$30.00", "$20.00"] {
            assert!(output.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_table_shows_nan() {
        let breakdown = calculate_allocations(f64::NAN, &AllocationPercentages::default());
        let output = format_allocation_table(f64::NAN, &breakdown, "$");
        assert!(output.contains("$NaN"));
    }

    #[test]
    fn test_plan_skips_income_account() {
        let output = format_transfer_plan(&test_registry(), &AllocationEngine::default(), 1000.0, "$");

        assert!(!output.contains("  Income "));
        assert!(output.contains("GST"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("not routed"));
    }
}
