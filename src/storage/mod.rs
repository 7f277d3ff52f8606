//! Storage layer for the contact book
//!
//! Provides line-delimited file storage with atomic writes and automatic
//! directory creation.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_text, write_atomic};

use crate::config::paths::ContactPaths;
use crate::config::settings::{MalformedLinePolicy, Settings};
use crate::error::ContactError;

/// Main storage coordinator
pub struct Storage {
    paths: ContactPaths,
    policy: MalformedLinePolicy,
    pub contacts: ContactRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ContactPaths, settings: &Settings) -> Result<Self, ContactError> {
        paths.ensure_directories()?;

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file(), settings.malformed_lines),
            policy: settings.malformed_lines,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    /// Repository over the backup file, sharing the store's line policy
    pub fn backup_repository(&self) -> ContactRepository {
        ContactRepository::new(self.paths.backup_file(), self.policy)
    }
}
