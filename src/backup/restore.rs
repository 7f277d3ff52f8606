//! Backup restoration for the contact book
//!
//! Handles replacing the contact store with the backup file's contents.

use tracing::info;

use crate::error::ContactResult;
use crate::storage::{ContactRepository, Storage};

/// Handles restoring from the backup file
pub struct RestoreManager {
    store: ContactRepository,
    backup: ContactRepository,
}

/// Result of a restore operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The store now holds the backup's contacts
    Restored { count: usize },
    /// There was no backup file; nothing changed
    NoBackup,
}

impl RestoreOutcome {
    /// Get a summary of what happened
    pub fn summary(&self) -> String {
        match self {
            Self::Restored { count } => {
                format!("Contacts restored from backup ({} contact(s)).", count)
            }
            Self::NoBackup => "No backup file found.".to_string(),
        }
    }
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(store: ContactRepository, backup: ContactRepository) -> Self {
        Self { store, backup }
    }

    /// Create a RestoreManager over a storage's store and backup file
    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(storage.contacts.clone(), storage.backup_repository())
    }

    /// Replace the store with the backup's contacts
    ///
    /// A missing backup is reported as [`RestoreOutcome::NoBackup`], not an
    /// error. A malformed backup fails before the store is written.
    pub fn restore(&self) -> ContactResult<RestoreOutcome> {
        if !self.backup.exists() {
            return Ok(RestoreOutcome::NoBackup);
        }

        let contacts = self.backup.load()?;
        self.store.save(&contacts)?;

        info!(path = %self.backup.path().display(), count = contacts.len(), "restored contacts");
        Ok(RestoreOutcome::Restored {
            count: contacts.len(),
        })
    }
}
