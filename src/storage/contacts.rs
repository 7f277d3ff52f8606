//! Contact repository for line-delimited storage
//!
//! Each record is one `name,phone` line. There is no escaping: a line that
//! does not split into exactly two fields is malformed.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::settings::MalformedLinePolicy;
use crate::error::ContactError;
use crate::models::Contact;

use super::file_io::{read_text, write_atomic};

/// Field separator of the line format
const SEPARATOR: char = ',';

/// Repository for one contact line file
///
/// The primary store and the backup file are both read and written through
/// this type. It holds no records; every `load` reads the file afresh.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    path: PathBuf,
    policy: MalformedLinePolicy,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(path: PathBuf, policy: MalformedLinePolicy) -> Self {
        Self { path, policy }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all contacts in file order
    ///
    /// A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Contact>, ContactError> {
        let contacts = match read_text(&self.path)? {
            Some(text) => parse_contacts(&text, &self.path, self.policy)?,
            None => Vec::new(),
        };

        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    /// Replace the file with exactly the given contacts, in order
    pub fn save(&self, contacts: &[Contact]) -> Result<(), ContactError> {
        write_atomic(&self.path, format_contacts(contacts).as_bytes())?;

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}

/// Parse the line format
pub fn parse_contacts(
    text: &str,
    path: &Path,
    policy: MalformedLinePolicy,
) -> Result<Vec<Contact>, ContactError> {
    let mut contacts = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(SEPARATOR);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(phone), None) => contacts.push(Contact::new(name, phone)),
            _ => match policy {
                MalformedLinePolicy::Fail => {
                    return Err(ContactError::MalformedRecord {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        content: line.to_string(),
                    });
                }
                MalformedLinePolicy::Skip => {
                    warn!(
                        path = %path.display(),
                        line = idx + 1,
                        content = line,
                        "skipping malformed contact line"
                    );
                }
            },
        }
    }

    Ok(contacts)
}

/// Render contacts in the line format
pub fn format_contacts(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|c| format!("{}{}{}\n", c.name, SEPARATOR, c.phone))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo(policy: MalformedLinePolicy) -> (TempDir, ContactRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.txt");
        let repo = ContactRepository::new(path, policy);
        (temp_dir, repo)
    }

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("bob", "2223334444"),
            Contact::new("Alice", "1112223333"),
            Contact::new("charlie", "1112223333"),
        ]
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo(MalformedLinePolicy::Fail);
        assert!(!repo.exists());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, repo) = create_test_repo(MalformedLinePolicy::Fail);

        repo.save(&sample()).unwrap();
        assert_eq!(repo.load().unwrap(), sample());
    }

    #[test]
    fn test_save_format() {
        let (_temp_dir, repo) = create_test_repo(MalformedLinePolicy::Fail);

        repo.save(&sample()[..2]).unwrap();
        let text = std::fs::read_to_string(repo.path()).unwrap();
        assert_eq!(text, "bob,2223334444\nAlice,1112223333\n");
    }

    #[test]
    fn test_save_empty_truncates() {
        let (_temp_dir, repo) = create_test_repo(MalformedLinePolicy::Fail);

        repo.save(&sample()).unwrap();
        repo.save(&[]).unwrap();

        assert!(repo.exists());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_and_whitespace_ignored() {
        let contacts = parse_contacts(
            "\n  Alice,1112223333  \r\n\n\tBob,2223334444\n",
            Path::new("contacts.txt"),
            MalformedLinePolicy::Fail,
        )
        .unwrap();

        assert_eq!(
            contacts,
            vec![
                Contact::new("Alice", "1112223333"),
                Contact::new("Bob", "2223334444"),
            ]
        );
    }

    #[test]
    fn test_load_does_not_validate_phone() {
        let contacts = parse_contacts(
            "Alice,not-a-phone\n",
            Path::new("contacts.txt"),
            MalformedLinePolicy::Fail,
        )
        .unwrap();

        assert_eq!(contacts[0].phone, "not-a-phone");
    }

    #[test]
    fn test_malformed_line_fails() {
        let err = parse_contacts(
            "Alice,1112223333\nSmith, John,2223334444\n",
            Path::new("contacts.txt"),
            MalformedLinePolicy::Fail,
        )
        .unwrap_err();

        match err {
            ContactError::MalformedRecord { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "Smith, John,2223334444");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_separator_fails() {
        let err = parse_contacts(
            "no separator\n",
            Path::new("contacts.txt"),
            MalformedLinePolicy::Fail,
        )
        .unwrap_err();

        assert!(matches!(err, ContactError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_malformed_line_skipped() {
        let contacts = parse_contacts(
            "Alice,1112223333\nbroken\nBob,2223334444\n",
            Path::new("contacts.txt"),
            MalformedLinePolicy::Skip,
        )
        .unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].name, "Bob");
    }

    #[test]
    fn test_load_reports_file_path() {
        let (_temp_dir, repo) = create_test_repo(MalformedLinePolicy::Fail);
        std::fs::write(repo.path(), "a,b,c\n").unwrap();

        match repo.load().unwrap_err() {
            ContactError::MalformedRecord { path, .. } => assert_eq!(path, repo.path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
