//! Account repository for JSON storage
//!
//! Holds the six accounts (as drafts during setup, frozen afterwards) in
//! accounts.json together with the setup-complete flag.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ProfitFirstError, ProfitFirstResult};
use crate::models::{Account, AccountRegistry, AccountSlot};

use super::file_io::{read_json, write_json_atomic};

/// Serializable registry file
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RegistryData {
    #[serde(default)]
    setup_completed: bool,
    #[serde(default)]
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<RegistryData>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(RegistryData::default()),
        }
    }

    /// Load accounts from disk, seeding blank drafts on first use
    pub fn load(&self) -> ProfitFirstResult<()> {
        let mut file_data: RegistryData = read_json(&self.path)?;
        if file_data.accounts.is_empty() {
            file_data.accounts = AccountRegistry::default_drafts();
            file_data.setup_completed = false;
        }
        file_data.accounts.sort_by_key(|a| a.slot);

        let mut data = self.data.write().map_err(|e| {
            ProfitFirstError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data;

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> ProfitFirstResult<()> {
        let data = self.data.read().map_err(|e| {
            ProfitFirstError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all accounts in registry order
    pub fn get_all(&self) -> ProfitFirstResult<Vec<Account>> {
        let data = self.data.read().map_err(|e| {
            ProfitFirstError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.accounts.clone())
    }

    /// Get an account by slot
    pub fn get(&self, slot: AccountSlot) -> ProfitFirstResult<Option<Account>> {
        let data = self.data.read().map_err(|e| {
            ProfitFirstError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.accounts.iter().find(|a| a.slot == slot).cloned())
    }

    /// Find an account by display name (case-insensitive) or slot key
    pub fn find(&self, identifier: &str) -> ProfitFirstResult<Option<Account>> {
        let accounts = self.get_all()?;
        let needle = identifier.trim().to_lowercase();

        if let Some(account) = accounts.iter().find(|a| a.name.to_lowercase() == needle) {
            return Ok(Some(account.clone()));
        }

        Ok(AccountSlot::parse(identifier)
            .and_then(|slot| accounts.into_iter().find(|a| a.slot == slot)))
    }

    /// Replace a draft account (matched by slot)
    ///
    /// Fails once setup is complete.
    pub fn update(&self, account: Account) -> ProfitFirstResult<()> {
        let mut data = self.data.write().map_err(|e| {
            ProfitFirstError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.setup_completed {
            return Err(ProfitFirstError::SetupLocked);
        }

        match data.accounts.iter_mut().find(|a| a.slot == account.slot) {
            Some(existing) => {
                *existing = account;
                Ok(())
            }
            None => Err(ProfitFirstError::account_not_found(account.slot.key())),
        }
    }

    /// Whether setup has been completed
    pub fn is_setup_complete(&self) -> ProfitFirstResult<bool> {
        let data = self.data.read().map_err(|e| {
            ProfitFirstError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.setup_completed)
    }

    /// Mark setup as complete or reopen it
    pub fn set_setup_complete(&self, completed: bool) -> ProfitFirstResult<()> {
        let mut data = self.data.write().map_err(|e| {
            ProfitFirstError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.setup_completed = completed;
        Ok(())
    }

    /// The frozen registry, available only after setup
    pub fn registry(&self) -> ProfitFirstResult<AccountRegistry> {
        if !self.is_setup_complete()? {
            return Err(ProfitFirstError::SetupRequired);
        }
        AccountRegistry::finalize(self.get_all()?)
    }

    /// Poison the lock by panicking while holding it
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = self.data.write();
                panic!("poisoning account lock");
            })
            .join()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, AccountRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.json");
        let repo = AccountRepository::new(path);
        (temp_dir, repo)
    }

    fn fill(account: &mut Account) {
        account.bsb = "062-000".into();
        account.account_number = "12345678".into();
        account.bank_name = "CBA".into();
    }

    #[test]
    fn test_first_load_seeds_drafts() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let accounts = repo.get_all().unwrap();
        assert_eq!(accounts.len(), 6);
        assert_eq!(accounts[0].slot, AccountSlot::Income);
        assert!(!repo.is_setup_complete().unwrap());
    }

    #[test]
    fn test_update_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut gst = repo.get(AccountSlot::Gst).unwrap().unwrap();
        fill(&mut gst);
        repo.update(gst.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = AccountRepository::new(temp_dir.path().join("accounts.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(AccountSlot::Gst).unwrap().unwrap(), gst);
    }

    #[test]
    fn test_find_by_name_or_key() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert_eq!(
            repo.find("OWNER'S PAY").unwrap().unwrap().slot,
            AccountSlot::OwnersPay
        );
        assert_eq!(
            repo.find("owners-pay").unwrap().unwrap().slot,
            AccountSlot::OwnersPay
        );
        assert!(repo.find("savings").unwrap().is_none());
    }

    #[test]
    fn test_registry_requires_setup() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert!(matches!(
            repo.registry().unwrap_err(),
            ProfitFirstError::SetupRequired
        ));
    }

    #[test]
    fn test_update_rejected_after_setup() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        for mut account in repo.get_all().unwrap() {
            fill(&mut account);
            repo.update(account).unwrap();
        }
        repo.set_setup_complete(true).unwrap();
        assert_eq!(repo.registry().unwrap().len(), 6);

        let mut tax = repo.get(AccountSlot::Tax).unwrap().unwrap();
        tax.bank_name = "NAB".into();
        assert!(matches!(
            repo.update(tax).unwrap_err(),
            ProfitFirstError::SetupLocked
        ));
    }
}
