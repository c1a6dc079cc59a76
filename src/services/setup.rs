//! Setup service
//!
//! Drives the one-time collection of bank details: editing drafts, validating
//! them into a frozen registry, and reopening setup when details change.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ProfitFirstError, ProfitFirstResult};
use crate::models::{Account, AccountRegistry, AccountSlot, BankField};
use crate::storage::Storage;

/// Partial bank details; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BankDetailsUpdate {
    #[serde(default)]
    pub bsb: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
}

impl BankDetailsUpdate {
    pub fn is_empty(&self) -> bool {
        self.bsb.is_none() && self.account_number.is_none() && self.bank_name.is_none()
    }

    fn apply(&self, account: &mut Account) {
        let fields = [
            (BankField::Bsb, &self.bsb),
            (BankField::AccountNumber, &self.account_number),
            (BankField::BankName, &self.bank_name),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                account.set_field(field, value.trim());
            }
        }
    }
}

/// One entry of a setup import file
#[derive(Debug, Clone, Deserialize)]
struct ImportEntry {
    /// Slot key or display name
    account: String,
    #[serde(flatten)]
    details: BankDetailsUpdate,
}

#[derive(Debug, Clone, Deserialize)]
struct ImportFile {
    accounts: Vec<ImportEntry>,
}

/// Where setup currently stands
#[derive(Debug, Clone)]
pub struct SetupStatus {
    pub completed: bool,
    pub accounts: Vec<Account>,
}

impl SetupStatus {
    /// Accounts that still have an empty field, with the first such field
    pub fn incomplete(&self) -> Vec<(&Account, BankField)> {
        self.accounts
            .iter()
            .filter_map(|a| a.missing_field().map(|f| (a, f)))
            .collect()
    }
}

/// Service for account setup
pub struct SetupService<'a> {
    storage: &'a Storage,
}

impl<'a> SetupService<'a> {
    /// Create a new setup service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current drafts (or the frozen accounts once setup is complete)
    pub fn drafts(&self) -> ProfitFirstResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Summary for `setup status`
    pub fn status(&self) -> ProfitFirstResult<SetupStatus> {
        Ok(SetupStatus {
            completed: self.storage.accounts.is_setup_complete()?,
            accounts: self.storage.accounts.get_all()?,
        })
    }

    /// Edit the bank details of one draft account
    pub fn update_bank_details(
        &self,
        identifier: &str,
        update: &BankDetailsUpdate,
    ) -> ProfitFirstResult<Account> {
        if update.is_empty() {
            return Err(ProfitFirstError::Validation(
                "Nothing to update. Pass at least one of --bsb, --number or --bank.".into(),
            ));
        }

        let mut account = self
            .storage
            .accounts
            .find(identifier)?
            .ok_or_else(|| ProfitFirstError::account_not_found(identifier))?;

        update.apply(&mut account);
        self.storage.accounts.update(account.clone())?;
        self.storage.accounts.save()?;

        tracing::debug!(account = %account.name, "updated draft bank details");
        Ok(account)
    }

    /// Replace every draft at once, e.g. from the TUI setup form
    pub fn save_drafts(&self, accounts: Vec<Account>) -> ProfitFirstResult<()> {
        for account in accounts {
            self.storage.accounts.update(account)?;
        }
        self.storage.accounts.save()
    }

    /// Validate the drafts and freeze them
    ///
    /// Nothing changes on failure.
    pub fn complete(&self) -> ProfitFirstResult<AccountRegistry> {
        if self.storage.accounts.is_setup_complete()? {
            return Err(ProfitFirstError::SetupLocked);
        }

        let registry = AccountRegistry::finalize(self.storage.accounts.get_all()?)?;

        self.storage.accounts.set_setup_complete(true)?;
        self.storage.accounts.save()?;

        tracing::info!(accounts = registry.len(), "account setup completed");
        Ok(registry)
    }

    /// Reopen setup so bank details can be edited again
    pub fn reset(&self) -> ProfitFirstResult<()> {
        self.storage.accounts.set_setup_complete(false)?;
        self.storage.accounts.save()?;
        tracing::info!("account setup reopened");
        Ok(())
    }

    /// Bulk-apply bank details from a YAML or JSON file
    ///
    /// Every entry is resolved before anything is written, so an unknown
    /// account leaves the drafts untouched. Returns the accounts changed.
    pub fn import_file(&self, path: &Path) -> ProfitFirstResult<Vec<Account>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ProfitFirstError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        self.import_str(&contents)
    }

    fn import_str(&self, contents: &str) -> ProfitFirstResult<Vec<Account>> {
        if self.storage.accounts.is_setup_complete()? {
            return Err(ProfitFirstError::SetupLocked);
        }

        // JSON is valid YAML, so one parser covers both
        let file: ImportFile = serde_yaml::from_str(contents)
            .map_err(|e| ProfitFirstError::Validation(format!("Invalid import file: {}", e)))?;

        // Entries naming the same account build on each other
        let mut edits: BTreeMap<AccountSlot, Account> = BTreeMap::new();
        for entry in &file.accounts {
            let found = self
                .storage
                .accounts
                .find(&entry.account)?
                .ok_or_else(|| ProfitFirstError::account_not_found(entry.account.clone()))?;
            let account = edits.entry(found.slot).or_insert(found);
            entry.details.apply(account);
        }

        let changed: Vec<Account> = edits.into_values().collect();
        self.save_drafts(changed.clone())?;
        tracing::info!(accounts = changed.len(), "imported bank details");
        Ok(changed)
    }

    /// The frozen registry; fails until setup is complete
    pub fn registry(&self) -> ProfitFirstResult<AccountRegistry> {
        self.storage.accounts.registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ProfitFirstPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProfitFirstPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn full_update(n: usize) -> BankDetailsUpdate {
        BankDetailsUpdate {
            bsb: Some(format!("062-00{}", n)),
            account_number: Some(format!("1000000{}", n)),
            bank_name: Some("Commonwealth Bank".into()),
        }
    }

    fn fill_all(service: &SetupService) {
        for (i, slot) in AccountSlot::ALL.iter().enumerate() {
            service.update_bank_details(slot.key(), &full_update(i)).unwrap();
        }
    }

    #[test]
    fn test_update_bank_details() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);

        let update = BankDetailsUpdate {
            bsb: Some("  062-000 ".into()),
            ..Default::default()
        };
        let account = service.update_bank_details("GST", &update).unwrap();
        assert_eq!(account.bsb, "062-000");
        assert!(account.account_number.is_empty());
    }

    #[test]
    fn test_update_unknown_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);

        let err = service
            .update_bank_details("savings", &full_update(0))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_complete_blocked_until_all_fields_filled() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);

        for (i, slot) in AccountSlot::ALL.iter().take(5).enumerate() {
            service.update_bank_details(slot.key(), &full_update(i)).unwrap();
        }

        let err = service.complete().unwrap_err();
        match err {
            ProfitFirstError::SetupIncomplete { account, .. } => assert_eq!(account, "Expenses"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!storage.accounts.is_setup_complete().unwrap());
        assert!(matches!(
            service.registry().unwrap_err(),
            ProfitFirstError::SetupRequired
        ));
    }

    #[test]
    fn test_complete_then_locked_then_reset() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);
        fill_all(&service);

        let registry = service.complete().unwrap();
        assert_eq!(registry.len(), 6);
        assert_eq!(service.registry().unwrap(), registry);

        let err = service
            .update_bank_details("tax", &full_update(9))
            .unwrap_err();
        assert!(matches!(err, ProfitFirstError::SetupLocked));

        service.reset().unwrap();
        service.update_bank_details("tax", &full_update(9)).unwrap();
        assert!(!service.status().unwrap().completed);
    }

    #[test]
    fn test_import_yaml() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);

        let yaml = r#"
accounts:
  - account: Owner's Pay
    bsb: "083-001"
    account_number: "55554444"
    bank_name: NAB
  - account: tax
    bank_name: Westpac
"#;
        let changed = service.import_str(yaml).unwrap();
        assert_eq!(changed.len(), 2);

        let owners = storage.accounts.get(AccountSlot::OwnersPay).unwrap().unwrap();
        assert_eq!(owners.bsb, "083-001");
        assert!(owners.is_complete());
        let tax = storage.accounts.get(AccountSlot::Tax).unwrap().unwrap();
        assert_eq!(tax.bank_name, "Westpac");
    }

    #[test]
    fn test_import_json() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);

        let json = r#"{"accounts": [{"account": "gst", "bsb": "062-111"}]}"#;
        service.import_str(json).unwrap();
        assert_eq!(
            storage.accounts.get(AccountSlot::Gst).unwrap().unwrap().bsb,
            "062-111"
        );
    }

    #[test]
    fn test_import_unknown_account_changes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);

        let yaml = "accounts:\n  - account: gst\n    bsb: '1'\n  - account: savings\n    bsb: '2'\n";
        assert!(service.import_str(yaml).unwrap_err().is_not_found());
        assert!(storage
            .accounts
            .get(AccountSlot::Gst)
            .unwrap()
            .unwrap()
            .bsb
            .is_empty());
    }

    #[test]
    fn test_import_repeated_account_merges_entries() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);

        let yaml = "accounts:\n  - account: gst\n    bsb: '062-000'\n  - account: GST\n    bank_name: CBA\n";
        let changed = service.import_str(yaml).unwrap();
        assert_eq!(changed.len(), 1);

        let gst = storage.accounts.get(AccountSlot::Gst).unwrap().unwrap();
        assert_eq!(gst.bsb, "062-000");
        assert_eq!(gst.bank_name, "CBA");
    }

    #[test]
    fn test_status_lists_incomplete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SetupService::new(&storage);
        service.update_bank_details("income", &full_update(0)).unwrap();

        let status = service.status().unwrap();
        assert_eq!(status.incomplete().len(), 5);
        assert_eq!(status.incomplete()[0].1, BankField::Bsb);
    }
}
