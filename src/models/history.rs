//! Transaction history
//!
//! Append-only record of transfers confirmed by the payment provider during
//! the current session. Lost when the session ends.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::TransferId;
use super::money::Money;

/// One completed transfer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub id: TransferId,
    /// When the transfer was recorded
    pub date: DateTime<Utc>,
    /// Name of the source account
    pub from_account: String,
    /// Name of the destination account
    pub to_account: String,
    pub amount: Money,
}

/// Session transaction history
#[derive(Debug, Clone, Default)]
pub struct TransactionHistory {
    entries: Vec<TransactionRecord>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return a reference to it
    pub fn append(&mut self, record: TransactionRecord) -> &TransactionRecord {
        self.entries.push(record);
        &self.entries[self.entries.len() - 1]
    }

    /// Entries in the order they were recorded
    pub fn entries(&self) -> &[TransactionRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total moved this session
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }
}
