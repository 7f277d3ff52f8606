//! CLI command for CSV export

use std::path::PathBuf;

use crate::error::ContactResult;
use crate::export::export_contacts_csv_file;
use crate::storage::Storage;

/// Export contacts to `output`, or to the default CSV file
pub fn handle_export(storage: &Storage, output: Option<PathBuf>) -> ContactResult<()> {
    let output = output.unwrap_or_else(|| storage.paths().csv_file());
    let count = export_contacts_csv_file(storage, &output)?;

    println!(
        "Exported {} contact(s) to '{}'.",
        count,
        output.display()
    );
    Ok(())
}
