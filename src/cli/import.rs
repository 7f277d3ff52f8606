//! CLI command for CSV import

use std::path::PathBuf;

use crate::error::ContactResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Replace the store with contacts from `input`, or from the default CSV file
pub fn handle_import(storage: &Storage, input: Option<PathBuf>) -> ContactResult<()> {
    let service = ImportService::new(storage);
    let (count, input) = match input {
        Some(path) => (service.import_from_file(&path)?, path),
        None => (service.import_default()?, storage.paths().csv_file()),
    };

    println!(
        "Imported {} contact(s) from '{}'.",
        count,
        input.display()
    );
    Ok(())
}
