//! Storage layer for ProfitFirst
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Only the account registry is persisted; transaction history and
//! balances live in memory for the length of a session.

pub mod accounts;
pub mod file_io;

pub use accounts::AccountRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::ProfitFirstPaths;
use crate::error::ProfitFirstError;

/// Main storage coordinator
pub struct Storage {
    paths: ProfitFirstPaths,
    pub accounts: AccountRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ProfitFirstPaths) -> Result<Self, ProfitFirstError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ProfitFirstPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ProfitFirstError> {
        self.accounts.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ProfitFirstError> {
        self.accounts.save()
    }
}
