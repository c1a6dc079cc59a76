//! Account model
//!
//! The six Profit First bank accounts. Each account has a fixed slot (its
//! identity), a category, and the routing details entered at setup.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;

/// Category of an account under the Profit First method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Where revenue lands
    Income,
    /// Operating accounts
    Core,
    /// Accounts held back for profit and tax
    Vault,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Core => write!(f, "Core"),
            Self::Vault => write!(f, "Vault"),
        }
    }
}

/// Fixed identity of each of the six accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountSlot {
    Income,
    Gst,
    Profit,
    Tax,
    OwnersPay,
    Expenses,
}

impl AccountSlot {
    /// All slots in registry order
    pub const ALL: [AccountSlot; 6] = [
        Self::Income,
        Self::Gst,
        Self::Profit,
        Self::Tax,
        Self::OwnersPay,
        Self::Expenses,
    ];

    /// Display name given to the account at setup
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Gst => "GST",
            Self::Profit => "Profit",
            Self::Tax => "Tax",
            Self::OwnersPay => "Owner's Pay",
            Self::Expenses => "Expenses",
        }
    }

    /// The category this slot belongs to
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Income => AccountType::Income,
            Self::Gst | Self::OwnersPay | Self::Expenses => AccountType::Core,
            Self::Profit | Self::Tax => AccountType::Vault,
        }
    }

    /// Config/CLI key, e.g. `owners_pay`
    pub fn key(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Gst => "gst",
            Self::Profit => "profit",
            Self::Tax => "tax",
            Self::OwnersPay => "owners_pay",
            Self::Expenses => "expenses",
        }
    }

    /// Parse a slot from its key or its display name
    ///
    /// Case, spaces, dashes, underscores and apostrophes are ignored, so
    /// "Owner's Pay", "owners-pay" and "OWNERS_PAY" all match.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_' | '\'' | '\u{2019}'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "income" => Some(Self::Income),
            "gst" => Some(Self::Gst),
            "profit" => Some(Self::Profit),
            "tax" => Some(Self::Tax),
            "ownerspay" => Some(Self::OwnersPay),
            "expenses" => Some(Self::Expenses),
            _ => None,
        }
    }
}

impl fmt::Display for AccountSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// The three bank details collected for every account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankField {
    Bsb,
    AccountNumber,
    BankName,
}

impl BankField {
    pub const ALL: [BankField; 3] = [Self::Bsb, Self::AccountNumber, Self::BankName];
}

impl fmt::Display for BankField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bsb => write!(f, "BSB"),
            Self::AccountNumber => write!(f, "Account Number"),
            Self::BankName => write!(f, "Bank Name"),
        }
    }
}

/// A bank account in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Which of the six accounts this is
    pub slot: AccountSlot,

    /// Display name (e.g., "Owner's Pay")
    pub name: String,

    /// Bank State Branch code
    #[serde(default)]
    pub bsb: String,

    /// Account number, also used as the provider-side account reference
    #[serde(default)]
    pub account_number: String,

    /// Name of the bank holding the account
    #[serde(default)]
    pub bank_name: String,

    /// Category of account
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl Account {
    /// Create a blank account for a slot, ready to be filled in at setup
    pub fn draft(slot: AccountSlot) -> Self {
        Self {
            id: AccountId::new(),
            slot,
            name: slot.default_name().to_string(),
            bsb: String::new(),
            account_number: String::new(),
            bank_name: String::new(),
            account_type: slot.account_type(),
        }
    }

    /// Read one of the bank detail fields
    pub fn field(&self, field: BankField) -> &str {
        match field {
            BankField::Bsb => &self.bsb,
            BankField::AccountNumber => &self.account_number,
            BankField::BankName => &self.bank_name,
        }
    }

    /// Overwrite one of the bank detail fields
    pub fn set_field(&mut self, field: BankField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BankField::Bsb => self.bsb = value,
            BankField::AccountNumber => self.account_number = value,
            BankField::BankName => self.bank_name = value,
        }
    }

    /// First bank detail that is still empty, if any
    pub fn missing_field(&self) -> Option<BankField> {
        BankField::ALL
            .into_iter()
            .find(|f| self.field(*f).is_empty())
    }

    /// Whether all bank details have been entered
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Income accounts are only ever a transfer source
    pub fn can_receive_transfer(&self) -> bool {
        self.account_type != AccountType::Income
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let account = Account::draft(AccountSlot::OwnersPay);
        assert_eq!(account.name, "Owner's Pay");
        assert_eq!(account.account_type, AccountType::Core);
        assert!(account.bsb.is_empty());
        assert_eq!(account.missing_field(), Some(BankField::Bsb));
    }

    #[test]
    fn test_slot_types() {
        assert_eq!(AccountSlot::Income.account_type(), AccountType::Income);
        assert_eq!(AccountSlot::Gst.account_type(), AccountType::Core);
        assert_eq!(AccountSlot::Profit.account_type(), AccountType::Vault);
        assert_eq!(AccountSlot::Tax.account_type(), AccountType::Vault);
        assert_eq!(AccountSlot::Expenses.account_type(), AccountType::Core);
    }

    #[test]
    fn test_slot_parse() {
        assert_eq!(AccountSlot::parse("Owner's Pay"), Some(AccountSlot::OwnersPay));
        assert_eq!(AccountSlot::parse("owners-pay"), Some(AccountSlot::OwnersPay));
        assert_eq!(AccountSlot::parse("OWNERS_PAY"), Some(AccountSlot::OwnersPay));
        assert_eq!(AccountSlot::parse("gst"), Some(AccountSlot::Gst));
        assert_eq!(AccountSlot::parse("savings"), None);
    }

    #[test]
    fn test_missing_field_order() {
        let mut account = Account::draft(AccountSlot::Gst);
        account.set_field(BankField::Bsb, "062-000");
        assert_eq!(account.missing_field(), Some(BankField::AccountNumber));
        account.set_field(BankField::AccountNumber, "12345678");
        assert_eq!(account.missing_field(), Some(BankField::BankName));
        // Any non-empty value counts, whitespace included
        account.set_field(BankField::BankName, " ");
        assert!(account.is_complete());
    }

    #[test]
    fn test_income_cannot_receive() {
        assert!(!Account::draft(AccountSlot::Income).can_receive_transfer());
        assert!(Account::draft(AccountSlot::Tax).can_receive_transfer());
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let account = Account::draft(AccountSlot::Profit);
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "vault");
        assert_eq!(json["slot"], "profit");
    }
}
