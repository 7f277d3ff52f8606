//! Contact CLI commands
//!
//! Implements CLI commands for adding, listing, searching, deleting and
//! editing contacts.

use clap::Subcommand;

use crate::display::{format_contact_list, format_search_results};
use crate::error::ContactResult;
use crate::models::Contact;
use crate::services::ContactService;
use crate::storage::Storage;

use super::prompt::prompt;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Add a new contact
    Add {
        /// Contact name
        name: String,
        /// Phone number (exactly 10 digits)
        phone: String,
    },

    /// List all contacts sorted by name
    #[command(alias = "view")]
    List,

    /// Search contacts by part of the name or phone number
    Search {
        /// Name or phone fragment
        query: String,
    },

    /// Delete a contact by name
    #[command(alias = "rm")]
    Delete {
        /// Contact name (case-insensitive)
        name: String,
    },

    /// Change a contact's phone number
    Edit {
        /// Contact name (case-insensitive)
        name: String,
        /// New phone number; prompted for if omitted
        phone: Option<String>,
    },
}

/// Handle a contact command
pub fn handle_contact_command(storage: &Storage, cmd: ContactCommands) -> ContactResult<()> {
    match cmd {
        ContactCommands::Add { name, phone } => add_contact(storage, &name, &phone),
        ContactCommands::List => view_contacts(storage),
        ContactCommands::Search { query } => search_contacts(storage, &query),
        ContactCommands::Delete { name } => delete_contact(storage, &name),
        ContactCommands::Edit {
            name,
            phone: Some(phone),
        } => {
            let updated = ContactService::new(storage).update_phone(&name, &phone)?;
            report_updated(&updated);
            Ok(())
        }
        ContactCommands::Edit { name, phone: None } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            edit_contact(storage, &name, &mut input)
        }
    }
}

/// Add a contact and report it
pub fn add_contact(storage: &Storage, name: &str, phone: &str) -> ContactResult<()> {
    let contact = ContactService::new(storage).add(name, phone)?;
    println!("Contact {} added successfully!", contact.name);
    Ok(())
}

/// Print every contact sorted by name
pub fn view_contacts(storage: &Storage) -> ContactResult<()> {
    let contacts = ContactService::new(storage).list()?;
    print!("{}", with_newline(format_contact_list(&contacts)));
    Ok(())
}

/// Print contacts matching a query
pub fn search_contacts(storage: &Storage, query: &str) -> ContactResult<()> {
    let found = ContactService::new(storage).search(query)?;
    print!("{}", with_newline(format_search_results(&found)));
    Ok(())
}

/// Delete a contact and report it
pub fn delete_contact(storage: &Storage, name: &str) -> ContactResult<()> {
    ContactService::new(storage).delete(name)?;
    println!("Contact {} deleted successfully!", name);
    Ok(())
}

/// Edit a contact, asking for the new phone only once the contact is found
pub fn edit_contact<R: std::io::BufRead>(
    storage: &Storage,
    name: &str,
    input: &mut R,
) -> ContactResult<()> {
    let updated = ContactService::new(storage).edit(name, |_| {
        prompt(input, &format!("Enter new phone number for {}: ", name))
    })?;
    report_updated(&updated);
    Ok(())
}

fn report_updated(contact: &Contact) {
    println!("Contact {} updated successfully!", contact.name);
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
