//! Interactive numbered menu
//!
//! Runs until the user picks Exit or input ends. A failed operation prints
//! its error and returns to the menu.

use std::io::BufRead;

use crate::error::ContactResult;
use crate::storage::Storage;

use super::backup::{backup_contacts, restore_contacts};
use super::contact::{add_contact, delete_contact, edit_contact, search_contacts, view_contacts};
use super::export::handle_export;
use super::import::handle_import;
use super::prompt::{prompt, read_line};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Delete,
    Edit,
    Export,
    Import,
    Backup,
    Restore,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order; an entry's number is its index plus one
    pub const ALL: [MenuChoice; 10] = [
        Self::Add,
        Self::View,
        Self::Search,
        Self::Delete,
        Self::Edit,
        Self::Export,
        Self::Import,
        Self::Backup,
        Self::Restore,
        Self::Exit,
    ];

    /// Parse the user's answer to the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add Contact",
            Self::View => "View Contacts",
            Self::Search => "Search Contact",
            Self::Delete => "Delete Contact",
            Self::Edit => "Edit Contact",
            Self::Export => "Export Contacts to CSV",
            Self::Import => "Import Contacts from CSV",
            Self::Backup => "Backup Contacts",
            Self::Restore => "Restore Contacts",
            Self::Exit => "Exit",
        }
    }
}

/// Render the menu text
pub fn format_menu() -> String {
    let mut output = String::from("\n--- Contact Management ---\n");
    for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, choice.label()));
    }
    output
}

/// Run the menu loop against `input`
pub fn run_menu<R: BufRead>(storage: &Storage, input: &mut R) -> ContactResult<()> {
    loop {
        print!("{}", format_menu());
        print!("Enter your choice (1-{}): ", MenuChoice::ALL.len());
        std::io::Write::flush(&mut std::io::stdout())?;

        let Some(answer) = read_line(input)? else {
            println!();
            break;
        };

        let choice = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Exit) => {
                println!("Exiting...");
                break;
            }
            Some(choice) => choice,
            None => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };

        if let Err(e) = run_choice(storage, choice, input) {
            println!("Error: {}", e);
        }
    }

    Ok(())
}

fn run_choice<R: BufRead>(storage: &Storage, choice: MenuChoice, input: &mut R) -> ContactResult<()> {
    match choice {
        MenuChoice::Add => {
            let name = prompt(input, "Enter name: ")?;
            let phone = prompt(input, "Enter phone number: ")?;
            add_contact(storage, &name, &phone)
        }
        MenuChoice::View => view_contacts(storage),
        MenuChoice::Search => {
            let query = prompt(input, "Enter name or phone number to search: ")?;
            search_contacts(storage, &query)
        }
        MenuChoice::Delete => {
            let name = prompt(input, "Enter the name to delete: ")?;
            delete_contact(storage, &name)
        }
        MenuChoice::Edit => {
            let name = prompt(input, "Enter the name to edit: ")?;
            edit_contact(storage, &name, input)
        }
        MenuChoice::Export => handle_export(storage, None),
        MenuChoice::Import => handle_import(storage, None),
        MenuChoice::Backup => backup_contacts(storage),
        MenuChoice::Restore => restore_contacts(storage),
        MenuChoice::Exit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Edit));
        assert_eq!(MenuChoice::parse("10"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_invalid_choices() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("11"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("-1"), None);
    }

    #[test]
    fn test_format_menu() {
        let menu = format_menu();
        assert!(menu.contains("1. Add Contact\n"));
        assert!(menu.contains("9. Restore Contacts\n"));
        assert!(menu.contains("10. Exit\n"));
    }
}
