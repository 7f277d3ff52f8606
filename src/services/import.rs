//! CSV Import service
//!
//! Replaces the whole contact store with the rows of a CSV file. The first
//! row is a header and is skipped; each following row contributes its first
//! two fields as name and phone. Rows are taken as-is: no phone check and no
//! duplicate check.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::info;

use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::storage::Storage;

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import contacts from the default CSV location
    pub fn import_default(&self) -> ContactResult<usize> {
        let path = self.storage.paths().csv_file();
        self.import_from_file(&path)
    }

    /// Import contacts from a CSV file, replacing the store
    ///
    /// Returns the number of contacts imported. Nothing is saved if the file
    /// is missing or any row is short.
    pub fn import_from_file(&self, path: &Path) -> ContactResult<usize> {
        if !path.exists() {
            return Err(ContactError::Import(format!(
                "CSV file not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            ContactError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut reader = csv_reader(file);
        let contacts = parse_csv_from_reader(&mut reader)?;

        self.storage.contacts.save(&contacts)?;

        info!(path = %path.display(), count = contacts.len(), "imported contacts from CSV");
        Ok(contacts.len())
    }
}

/// Build a CSV reader that treats the first row as a header and allows
/// rows of any width
pub fn csv_reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source)
}

/// Parse every data row of a CSV reader into contacts
///
/// A source without a header row is rejected rather than read as empty.
pub fn parse_csv_from_reader<R: Read>(reader: &mut Reader<R>) -> ContactResult<Vec<Contact>> {
    let headers = reader
        .headers()
        .map_err(|e| ContactError::Import(format!("Error reading CSV header: {}", e)))?;
    if headers.is_empty() {
        return Err(ContactError::Import("CSV file has no header row".into()));
    }

    let mut contacts = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ContactError::Import(format!("Error reading CSV record: {}", e)))?;
        contacts.push(parse_record(&record)?);
    }

    Ok(contacts)
}

/// Parse a single CSV record
fn parse_record(record: &StringRecord) -> ContactResult<Contact> {
    match (record.get(0), record.get(1)) {
        (Some(name), Some(phone)) => Ok(Contact::new(name, phone)),
        _ => {
            let line = record
                .position()
                .map(|p| p.line().to_string())
                .unwrap_or_else(|| "?".to_string());
            Err(ContactError::Import(format!(
                "Row at line {} has {} field(s), expected name and phone",
                line,
                record.len()
            )))
        }
    }
}
