//! Account registry
//!
//! The frozen list of six accounts produced by a successful setup. There are
//! no mutators: to change bank details, setup has to be reopened.

use std::collections::HashSet;

use super::account::{Account, AccountSlot};
use crate::error::{ProfitFirstError, ProfitFirstResult};

/// The finalized set of accounts
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Blank drafts for the six default accounts, in registry order
    pub fn default_drafts() -> Vec<Account> {
        AccountSlot::ALL.into_iter().map(Account::draft).collect()
    }

    /// Validate drafts and freeze them into a registry
    ///
    /// Every account must carry a BSB, account number and bank name, and each
    /// of the six slots must appear exactly once.
    pub fn finalize(mut accounts: Vec<Account>) -> ProfitFirstResult<Self> {
        for account in &accounts {
            if let Some(field) = account.missing_field() {
                return Err(ProfitFirstError::SetupIncomplete {
                    account: account.name.clone(),
                    field: field.to_string(),
                });
            }
        }

        let mut seen_slots = HashSet::new();
        let mut seen_ids = HashSet::new();
        for account in &accounts {
            if !seen_slots.insert(account.slot) {
                return Err(ProfitFirstError::Validation(format!(
                    "Account '{}' appears more than once",
                    account.slot
                )));
            }
            if !seen_ids.insert(account.id) {
                return Err(ProfitFirstError::Validation(format!(
                    "Duplicate account id {}",
                    account.id
                )));
            }
        }
        if let Some(missing) = AccountSlot::ALL.iter().find(|s| !seen_slots.contains(*s)) {
            return Err(ProfitFirstError::Validation(format!(
                "Account '{}' is missing from setup",
                missing
            )));
        }

        accounts.sort_by_key(|a| a.slot);
        Ok(Self { accounts })
    }

    /// All accounts in registry order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The first account, which every transfer is sent from
    pub fn source_account(&self) -> &Account {
        &self.accounts[0]
    }

    /// Look up an account by slot
    pub fn get(&self, slot: AccountSlot) -> Option<&Account> {
        self.accounts.iter().find(|a| a.slot == slot)
    }

    /// Find an account by slot key or display name (case-insensitive)
    pub fn find(&self, identifier: &str) -> Option<&Account> {
        let needle = identifier.trim().to_lowercase();
        self.accounts
            .iter()
            .find(|a| a.name.to_lowercase() == needle)
            .or_else(|| AccountSlot::parse(identifier).and_then(|slot| self.get(slot)))
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Always false for a finalized registry
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::account::{AccountType, BankField};

    pub(crate) fn filled_drafts() -> Vec<Account> {
        AccountRegistry::default_drafts()
            .into_iter()
            .enumerate()
            .map(|(i, mut a)| {
                a.bsb = format!("062-00{}", i);
                a.account_number = format!("1000000{}", i);
                a.bank_name = "Commonwealth Bank".to_string();
                a
            })
            .collect()
    }

    pub(crate) fn test_registry() -> AccountRegistry {
        AccountRegistry::finalize(filled_drafts()).unwrap()
    }

    #[test]
    fn test_default_drafts() {
        let drafts = AccountRegistry::default_drafts();
        let names: Vec<_> = drafts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Income", "GST", "Profit", "Tax", "Owner's Pay", "Expenses"]
        );
        assert_eq!(drafts[0].account_type, AccountType::Income);
    }

    #[test]
    fn test_finalize_accepts_complete_drafts() {
        let registry = test_registry();
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.source_account().slot, AccountSlot::Income);
    }

    #[test]
    fn test_finalize_rejects_any_empty_field() {
        for index in 0..6 {
            for field in BankField::ALL {
                let mut drafts = filled_drafts();
                drafts[index].set_field(field, "");
                let err = AccountRegistry::finalize(drafts).unwrap_err();
                assert!(
                    matches!(err, ProfitFirstError::SetupIncomplete { .. }),
                    "account {} field {} should block setup",
                    index,
                    field
                );
            }
        }
    }

    #[test]
    fn test_finalize_accepts_whitespace_values() {
        let mut drafts = filled_drafts();
        drafts[2].set_field(BankField::BankName, " ");
        assert!(AccountRegistry::finalize(drafts).is_ok());
    }

    #[test]
    fn test_finalize_rejects_blank_drafts() {
        let err = AccountRegistry::finalize(AccountRegistry::default_drafts()).unwrap_err();
        match err {
            ProfitFirstError::SetupIncomplete { account, field } => {
                assert_eq!(account, "Income");
                assert_eq!(field, "BSB");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_finalize_rejects_missing_slot() {
        let mut drafts = filled_drafts();
        drafts.pop();
        let err = AccountRegistry::finalize(drafts).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_finalize_sorts_by_slot() {
        let mut drafts = filled_drafts();
        drafts.reverse();
        let registry = AccountRegistry::finalize(drafts).unwrap();
        assert_eq!(registry.accounts()[0].slot, AccountSlot::Income);
        assert_eq!(registry.accounts()[5].slot, AccountSlot::Expenses);
    }

    #[test]
    fn test_find() {
        let registry = test_registry();
        assert_eq!(registry.find("gst").unwrap().slot, AccountSlot::Gst);
        assert_eq!(registry.find("owner's pay").unwrap().slot, AccountSlot::OwnersPay);
        assert_eq!(registry.find("owners_pay").unwrap().slot, AccountSlot::OwnersPay);
        assert!(registry.find("savings").is_none());
    }
}
