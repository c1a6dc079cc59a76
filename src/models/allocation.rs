//! Allocation model
//!
//! Percentages, the five derived allocations, and the routing table that says
//! which allocation is transferred into which account.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::account::AccountSlot;

/// The six percentage parameters
///
/// Values are nominally 0-100 but are neither clamped nor required to sum to
/// anything: each one is applied to a different base amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationPercentages {
    pub gst: f64,
    pub service_fee: f64,
    pub base_revenue: f64,
    pub contractor: f64,
    pub core: f64,
    pub vault: f64,
}

impl Default for AllocationPercentages {
    fn default() -> Self {
        Self {
            gst: 10.0,
            service_fee: 5.0,
            base_revenue: 85.0,
            contractor: 70.0,
            core: 60.0,
            vault: 40.0,
        }
    }
}

impl AllocationPercentages {
    /// Read a single percentage
    pub fn get(&self, field: PercentageField) -> f64 {
        match field {
            PercentageField::Gst => self.gst,
            PercentageField::ServiceFee => self.service_fee,
            PercentageField::BaseRevenue => self.base_revenue,
            PercentageField::Contractor => self.contractor,
            PercentageField::Core => self.core,
            PercentageField::Vault => self.vault,
        }
    }

    /// Replace a single percentage
    pub fn set(&mut self, field: PercentageField, value: f64) {
        match field {
            PercentageField::Gst => self.gst = value,
            PercentageField::ServiceFee => self.service_fee = value,
            PercentageField::BaseRevenue => self.base_revenue = value,
            PercentageField::Contractor => self.contractor = value,
            PercentageField::Core => self.core = value,
            PercentageField::Vault => self.vault = value,
        }
    }
}

/// Names of the six percentage parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentageField {
    Gst,
    ServiceFee,
    BaseRevenue,
    Contractor,
    Core,
    Vault,
}

impl PercentageField {
    pub const ALL: [PercentageField; 6] = [
        Self::Gst,
        Self::ServiceFee,
        Self::BaseRevenue,
        Self::Contractor,
        Self::Core,
        Self::Vault,
    ];

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gst => "GST",
            Self::ServiceFee => "Service Fee",
            Self::BaseRevenue => "Base Revenue",
            Self::Contractor => "Contractor",
            Self::Core => "Core",
            Self::Vault => "Vault",
        }
    }
}

/// The five derived allocations, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationKind {
    Gst,
    ServiceFee,
    Contractor,
    Core,
    Vault,
}

impl AllocationKind {
    pub const ALL: [AllocationKind; 5] = [
        Self::Gst,
        Self::ServiceFee,
        Self::Contractor,
        Self::Core,
        Self::Vault,
    ];

    /// Display name of the allocation
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gst => "GST",
            Self::ServiceFee => "Service Fee",
            Self::Contractor => "Contractor",
            Self::Core => "Core",
            Self::Vault => "Vault",
        }
    }

    /// The percentage parameter shown alongside this allocation
    pub fn percentage_field(&self) -> PercentageField {
        match self {
            Self::Gst => PercentageField::Gst,
            Self::ServiceFee => PercentageField::ServiceFee,
            Self::Contractor => PercentageField::Contractor,
            Self::Core => PercentageField::Core,
            Self::Vault => PercentageField::Vault,
        }
    }
}

impl fmt::Display for AllocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of the allocation breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub kind: AllocationKind,
    /// Dollar amount, unrounded
    pub amount: f64,
    /// The percentage parameter that produced it
    pub percentage: f64,
}

impl Allocation {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// All five allocations for one income figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationBreakdown {
    allocations: [Allocation; 5],
}

impl AllocationBreakdown {
    pub(crate) fn new(allocations: [Allocation; 5]) -> Self {
        Self { allocations }
    }

    /// Allocations in fixed order: GST, Service Fee, Contractor, Core, Vault
    pub fn as_slice(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Allocation> {
        self.allocations.iter()
    }

    /// Amount for one allocation kind
    pub fn amount_for(&self, kind: AllocationKind) -> f64 {
        self.allocations
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.amount)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Which allocation is transferred into which account
///
/// Accounts without a route receive nothing. The default routes GST to the
/// GST account only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferRoutes(BTreeMap<AccountSlot, AllocationKind>);

impl Default for TransferRoutes {
    fn default() -> Self {
        let mut routes = BTreeMap::new();
        routes.insert(AccountSlot::Gst, AllocationKind::Gst);
        Self(routes)
    }
}

impl TransferRoutes {
    /// A table with no routes at all
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Route an allocation into an account
    pub fn with_route(mut self, slot: AccountSlot, kind: AllocationKind) -> Self {
        self.0.insert(slot, kind);
        self
    }

    /// Allocation routed into the given account, if any
    pub fn allocation_for(&self, slot: AccountSlot) -> Option<AllocationKind> {
        self.0.get(&slot).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountSlot, &AllocationKind)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_percentages() {
        let p = AllocationPercentages::default();
        assert_eq!(p.gst, 10.0);
        assert_eq!(p.service_fee, 5.0);
        assert_eq!(p.base_revenue, 85.0);
        assert_eq!(p.contractor, 70.0);
        assert_eq!(p.core, 60.0);
        assert_eq!(p.vault, 40.0);
    }

    #[test]
    fn test_get_set_by_field() {
        let mut p = AllocationPercentages::default();
        p.set(PercentageField::Contractor, 55.5);
        assert_eq!(p.get(PercentageField::Contractor), 55.5);
        assert_eq!(p.contractor, 55.5);
    }

    #[test]
    fn test_default_routes() {
        let routes = TransferRoutes::default();
        assert_eq!(routes.allocation_for(AccountSlot::Gst), Some(AllocationKind::Gst));
        assert_eq!(routes.allocation_for(AccountSlot::Profit), None);
    }

    #[test]
    fn test_routes_serialize_as_map() {
        let routes = TransferRoutes::default().with_route(AccountSlot::OwnersPay, AllocationKind::Core);
        let json = serde_json::to_string(&routes).unwrap();
        assert_eq!(json, r#"{"gst":"gst","owners_pay":"core"}"#);
        let back: TransferRoutes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, routes);
    }
}
