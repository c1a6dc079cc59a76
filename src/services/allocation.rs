//! Allocation engine
//!
//! Splits an income figure into the five Profit First allocations and works
//! out how much each account should receive.
//!
//! The bases are not all the same: contractor comes out of base revenue, and
//! core/vault come out of the service fee amount.

use crate::models::{
    Account, Allocation, AllocationBreakdown, AllocationKind, AllocationPercentages,
    TransferRoutes,
};

/// Compute the five allocations for an income figure
///
/// Input is not validated. Negative income gives negative allocations and a
/// NaN anywhere propagates to every amount derived from it.
pub fn calculate_allocations(income: f64, pcts: &AllocationPercentages) -> AllocationBreakdown {
    let gst_amount = income * (pcts.gst / 100.0);
    let service_fee_amount = income * (pcts.service_fee / 100.0);
    let base_revenue_amount = income * (pcts.base_revenue / 100.0);
    let contractor_amount = base_revenue_amount * (pcts.contractor / 100.0);

    let remaining_revenue = service_fee_amount;
    let core_amount = remaining_revenue * (pcts.core / 100.0);
    let vault_amount = remaining_revenue * (pcts.vault / 100.0);

    let line = |kind: AllocationKind, amount: f64| Allocation {
        kind,
        amount,
        percentage: pcts.get(kind.percentage_field()),
    };

    AllocationBreakdown::new([
        line(AllocationKind::Gst, gst_amount),
        line(AllocationKind::ServiceFee, service_fee_amount),
        line(AllocationKind::Contractor, contractor_amount),
        line(AllocationKind::Core, core_amount),
        line(AllocationKind::Vault, vault_amount),
    ])
}

/// Percentages plus routing: everything needed to price a transfer
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationEngine {
    pub percentages: AllocationPercentages,
    pub routes: TransferRoutes,
}

impl AllocationEngine {
    pub fn new(percentages: AllocationPercentages, routes: TransferRoutes) -> Self {
        Self {
            percentages,
            routes,
        }
    }

    /// Allocations for an income figure, recomputed on every call
    pub fn allocations(&self, income: f64) -> AllocationBreakdown {
        calculate_allocations(income, &self.percentages)
    }

    /// The allocation routed into an account, if any
    pub fn route_for(&self, account: &Account) -> Option<AllocationKind> {
        self.routes.allocation_for(account.slot)
    }

    /// Amount to transfer into an account; 0 when nothing is routed to it
    pub fn transfer_amount_for(&self, account: &Account, income: f64) -> f64 {
        match self.route_for(account) {
            Some(kind) => self.allocations(income).amount_for(kind),
            None => 0.0,
        }
    }
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new(AllocationPercentages::default(), TransferRoutes::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountSlot, PercentageField};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_breakdown() {
        let breakdown = calculate_allocations(1000.0, &AllocationPercentages::default());
        let amounts: Vec<f64> = breakdown.iter().map(|a| a.amount).collect();

        assert_close(amounts[0], 100.0);
        assert_close(amounts[1], 50.0);
        assert_close(amounts[2], 595.0);
        assert_close(amounts[3], 30.0);
        assert_close(amounts[4], 20.0);
    }

    #[test]
    fn test_fixed_order_and_percentages() {
        let breakdown = calculate_allocations(250.0, &AllocationPercentages::default());
        let names: Vec<_> = breakdown.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec!["GST", "Service Fee", "Contractor", "Core", "Vault"]
        );
        assert_eq!(breakdown.len(), 5);

        let pcts: Vec<f64> = breakdown.iter().map(|a| a.percentage).collect();
        assert_eq!(pcts, vec![10.0, 5.0, 70.0, 60.0, 40.0]);
    }

    #[test]
    fn test_contractor_uses_base_revenue() {
        let mut pcts = AllocationPercentages::default();
        pcts.set(PercentageField::BaseRevenue, 50.0);
        pcts.set(PercentageField::Contractor, 50.0);

        let breakdown = calculate_allocations(400.0, &pcts);
        assert_close(breakdown.amount_for(AllocationKind::Contractor), 100.0);
    }

    #[test]
    fn test_core_and_vault_use_service_fee() {
        let mut pcts = AllocationPercentages::default();
        pcts.set(PercentageField::ServiceFee, 20.0);

        let breakdown = calculate_allocations(1000.0, &pcts);
        assert_close(breakdown.amount_for(AllocationKind::Core), 120.0);
        assert_close(breakdown.amount_for(AllocationKind::Vault), 80.0);
    }

    #[test]
    fn test_zero_income() {
        let breakdown = calculate_allocations(0.0, &AllocationPercentages::default());
        assert_eq!(breakdown.len(), 5);
        assert!(breakdown.iter().all(|a| a.amount == 0.0));
    }

    #[test]
    fn test_nan_propagates() {
        let breakdown = calculate_allocations(f64::NAN, &AllocationPercentages::default());
        assert!(breakdown.iter().all(|a| a.amount.is_nan()));

        let mut pcts = AllocationPercentages::default();
        pcts.gst = f64::NAN;
        let breakdown = calculate_allocations(1000.0, &pcts);
        assert!(breakdown.amount_for(AllocationKind::Gst).is_nan());
        assert_close(breakdown.amount_for(AllocationKind::ServiceFee), 50.0);
    }

    #[test]
    fn test_percentages_unclamped() {
        let mut pcts = AllocationPercentages::default();
        pcts.gst = 150.0;
        let breakdown = calculate_allocations(-100.0, &pcts);
        assert_close(breakdown.amount_for(AllocationKind::Gst), -150.0);
    }

    #[test]
    fn test_default_routing_only_pays_gst() {
        let engine = AllocationEngine::default();
        let gst = Account::draft(AccountSlot::Gst);
        let profit = Account::draft(AccountSlot::Profit);
        let income = Account::draft(AccountSlot::Income);

        assert_close(engine.transfer_amount_for(&gst, 1000.0), 100.0);
        assert_eq!(engine.transfer_amount_for(&profit, 1000.0), 0.0);
        assert_eq!(engine.transfer_amount_for(&income, 1000.0), 0.0);
    }

    #[test]
    fn test_custom_route() {
        let engine = AllocationEngine::new(
            AllocationPercentages::default(),
            TransferRoutes::default().with_route(AccountSlot::Profit, AllocationKind::Vault),
        );
        let profit = Account::draft(AccountSlot::Profit);
        assert_close(engine.transfer_amount_for(&profit, 1000.0), 20.0);
    }
}
