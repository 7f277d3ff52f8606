//! Path management for the contact book
//!
//! Provides XDG-compliant path resolution for the contact store, its backup,
//! the CSV exchange file and the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACTS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contacts-cli` or `~/.config/contacts-cli`
//! 3. Windows: `%APPDATA%\contacts-cli`

use std::path::PathBuf;

use crate::error::ContactError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CONTACTS_DATA_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory for all contact book files
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Create a new ContactPaths instance
    ///
    /// Path resolution:
    /// 1. `CONTACTS_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/contacts-cli` or `~/.config/contacts-cli`
    /// 3. Windows: `%APPDATA%\contacts-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/contacts-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the primary contact store
    pub fn contacts_file(&self) -> PathBuf {
        self.base_dir.join("contacts.txt")
    }

    /// Get the path to the backup copy of the store
    pub fn backup_file(&self) -> PathBuf {
        self.base_dir.join("contacts_backup.txt")
    }

    /// Get the default CSV export/import location
    pub fn csv_file(&self) -> PathBuf {
        self.base_dir.join("contacts.csv")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ContactError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("contacts-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ContactError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("contacts-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.contacts_file(), temp_dir.path().join("contacts.txt"));
        assert_eq!(
            paths.backup_file(),
            temp_dir.path().join("contacts_backup.txt")
        );
        assert_eq!(paths.csv_file(), temp_dir.path().join("contacts.csv"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = ContactPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().join("nested").join("book"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
