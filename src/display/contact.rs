//! Contact display formatting
//!
//! Formats contacts for terminal output.

use crate::backup::BackupInfo;
use crate::models::Contact;

/// Format the contact list view
///
/// Expects contacts already in display order.
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found!".to_string();
    }

    let mut output = String::from("--- Contact List ---\n");
    for contact in contacts {
        output.push_str(&format!("{}\n", contact));
    }
    output
}

/// Format search hits
pub fn format_search_results(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No matching contacts found!".to_string();
    }

    contacts
        .iter()
        .map(|c| format!("Found: {}\n", c))
        .collect()
}

/// Format details about the backup file
pub fn format_backup_info(info: Option<&BackupInfo>) -> String {
    match info {
        None => "No backup file found.".to_string(),
        Some(info) => format!(
            "Backup:   {}\nModified: {}\nSize:     {} bytes\nContacts: {}",
            info.path.display(),
            info.modified_at.format("%Y-%m-%d %H:%M:%S UTC"),
            info.size_bytes,
            info.contact_count
        ),
    }
}
