//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;

use crate::backup::{BackupManager, RestoreManager};
use crate::display::format_backup_info;
use crate::error::ContactResult;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Copy the contact store to the backup file
    Create,

    /// Replace the contact store with the backup file
    Restore,

    /// Show information about the backup file
    Info,
}

/// Handle a backup command
pub fn handle_backup_command(storage: &Storage, cmd: BackupCommands) -> ContactResult<()> {
    match cmd {
        BackupCommands::Create => backup_contacts(storage),
        BackupCommands::Restore => restore_contacts(storage),
        BackupCommands::Info => {
            let info = BackupManager::from_storage(storage).backup_info()?;
            println!("{}", format_backup_info(info.as_ref()));
            Ok(())
        }
    }
}

/// Write the backup file and report it
pub fn backup_contacts(storage: &Storage) -> ContactResult<()> {
    let manager = BackupManager::from_storage(storage);
    let count = manager.create_backup()?;
    println!(
        "Backed up {} contact(s) to '{}'.",
        count,
        manager.backup_path().display()
    );
    Ok(())
}

/// Restore from the backup file and report the outcome
pub fn restore_contacts(storage: &Storage) -> ContactResult<()> {
    let outcome = RestoreManager::from_storage(storage).restore()?;
    println!("{}", outcome.summary());
    Ok(())
}
