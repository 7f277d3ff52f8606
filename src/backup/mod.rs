//! Backup system for the contact book
//!
//! Provides a single backup copy of the contact store and restore from it.
//!
//! # Architecture
//!
//! - `BackupManager`: writes the backup and reports on it
//! - `RestoreManager`: replaces the store with the backup
//!
//! # Backup Format
//!
//! The backup uses the store's own `name,phone` line format, so it can be
//! inspected or copied back by hand.
//!
//! # Example
//!
//! ```rust,ignore
//! use contacts::backup::{BackupManager, RestoreManager};
//!
//! let count = BackupManager::from_storage(&storage).create_backup()?;
//!
//! // Later
//! let outcome = RestoreManager::from_storage(&storage).restore()?;
//! println!("{}", outcome.summary());
//! ```

mod manager;
mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreOutcome};
