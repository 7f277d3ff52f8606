//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod contact;
pub mod export;
pub mod import;
pub mod menu;
pub mod prompt;

pub use backup::{handle_backup_command, BackupCommands};
pub use contact::{handle_contact_command, ContactCommands};
pub use export::handle_export;
pub use import::handle_import;
pub use menu::run_menu;
