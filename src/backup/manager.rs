//! Backup manager for the contact book
//!
//! Copies the contact store to a single backup file in the same line format.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{ContactError, ContactResult};
use crate::storage::{ContactRepository, Storage};

/// Metadata about the backup file
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was last written
    pub modified_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
    /// Number of contacts held
    pub contact_count: usize,
}

/// Manages backup creation
pub struct BackupManager {
    /// The primary store being backed up
    store: ContactRepository,
    /// The backup file
    backup: ContactRepository,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(store: ContactRepository, backup: ContactRepository) -> Self {
        Self { store, backup }
    }

    /// Create a BackupManager over a storage's store and backup file
    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(storage.contacts.clone(), storage.backup_repository())
    }

    /// Copy the current store to the backup file
    ///
    /// Returns the number of contacts written. The primary store is only read.
    pub fn create_backup(&self) -> ContactResult<usize> {
        let contacts = self.store.load()?;
        self.backup.save(&contacts)?;

        info!(path = %self.backup.path().display(), count = contacts.len(), "backed up contacts");
        Ok(contacts.len())
    }

    /// Get backup file path
    pub fn backup_path(&self) -> &Path {
        self.backup.path()
    }

    /// Describe the backup file, if there is one
    pub fn backup_info(&self) -> ContactResult<Option<BackupInfo>> {
        if !self.backup.exists() {
            return Ok(None);
        }

        let path = self.backup.path();
        let metadata = fs::metadata(path)
            .map_err(|e| ContactError::Io(format!("Failed to read backup metadata: {}", e)))?;
        let modified = metadata
            .modified()
            .map_err(|e| ContactError::Io(format!("Failed to read backup time: {}", e)))?;

        Ok(Some(BackupInfo {
            path: path.to_path_buf(),
            modified_at: DateTime::<Utc>::from(modified),
            size_bytes: metadata.len(),
            contact_count: self.backup.load()?.len(),
        }))
    }
}
