//! CSV Export functionality
//!
//! Writes the contact store to CSV with a `Name,Phone` header, one row per
//! contact in store order.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::storage::{write_atomic, Storage};

/// Header row of exported files
pub const CSV_HEADER: [&str; 2] = ["Name", "Phone"];

/// Write contacts as CSV to a writer
///
/// Returns the number of data rows written.
pub fn export_contacts_csv<W: Write>(contacts: &[Contact], writer: W) -> ContactResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ContactError::Export(e.to_string()))?;

    for contact in contacts {
        csv_writer
            .write_record([contact.name.as_str(), contact.phone.as_str()])
            .map_err(|e| ContactError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(contacts.len())
}

/// Export the contact store to a file, replacing it
///
/// The store is loaded before the target is touched, and the file is
/// replaced atomically, so a failed export leaves any previous CSV intact.
pub fn export_contacts_csv_file(storage: &Storage, output: &Path) -> ContactResult<usize> {
    let contacts = storage.contacts.load()?;

    let mut buffer = Vec::new();
    let count = export_contacts_csv(&contacts, &mut buffer)?;

    write_atomic(output, &buffer).map_err(|e| {
        ContactError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;

    info!(path = %output.display(), count, "exported contacts to CSV");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContactPaths, Settings};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_contacts_csv() {
        let contacts = [
            Contact::new("bob", "2222222222"),
            Contact::new("Alice", "1111111111"),
        ];

        let mut csv_output = Vec::new();
        let count = export_contacts_csv(&contacts, &mut csv_output).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(csv_output).unwrap(),
            "Name,Phone\nbob,2222222222\nAlice,1111111111\n"
        );
    }

    #[test]
    fn test_export_empty_store_writes_header() {
        let (temp_dir, storage) = create_test_storage();
        let output = temp_dir.path().join("out.csv");

        assert_eq!(export_contacts_csv_file(&storage, &output).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "Name,Phone\n");
    }

    #[test]
    fn test_export_to_writer_empty() {
        let mut csv_output = Vec::new();
        assert_eq!(export_contacts_csv(&[], &mut csv_output).unwrap(), 0);
        assert_eq!(String::from_utf8(csv_output).unwrap(), "Name,Phone\n");
    }

    #[test]
    fn test_export_file_overwrites() {
        let (temp_dir, storage) = create_test_storage();
        let output = temp_dir.path().join("out.csv");
        std::fs::write(&output, "stale content that is longer than the export\n").unwrap();

        storage
            .contacts
            .save(&[Contact::new("Alice", "1111111111")])
            .unwrap();
        export_contacts_csv_file(&storage, &output).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Name,Phone\nAlice,1111111111\n"
        );
    }

    #[test]
    fn test_export_failed_load_keeps_existing_csv() {
        let (temp_dir, storage) = create_test_storage();
        let output = temp_dir.path().join("out.csv");
        std::fs::write(&output, "Name,Phone\nKeep,1111111111\n").unwrap();
        std::fs::write(storage.contacts.path(), "broken\n").unwrap();

        let err = export_contacts_csv_file(&storage, &output).unwrap_err();

        assert!(matches!(err, ContactError::MalformedRecord { .. }));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Name,Phone\nKeep,1111111111\n"
        );
    }
}
