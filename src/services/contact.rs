//! Contact service
//!
//! Provides business logic for contact management. Every operation loads the
//! store fresh, computes, and saves the whole store back when it mutates.

use tracing::info;

use crate::error::{ContactError, ContactResult};
use crate::models::{validate_phone, Contact};
use crate::storage::Storage;

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Check whether a contact with this name exists (case-insensitive)
    pub fn exists(&self, name: &str) -> ContactResult<bool> {
        Ok(self
            .storage
            .contacts
            .load()?
            .iter()
            .any(|c| c.matches_name(name)))
    }

    /// Add a new contact
    ///
    /// The phone is checked before the name; nothing is written unless both
    /// pass and the name is not taken.
    pub fn add(&self, name: &str, phone: &str) -> ContactResult<Contact> {
        let contact = Contact::new(name, phone);
        contact
            .validate()
            .map_err(|e| ContactError::Validation(e.to_string()))?;

        if self.exists(name)? {
            return Err(ContactError::duplicate_contact(name));
        }

        let mut contacts = self.storage.contacts.load()?;
        contacts.push(contact.clone());
        self.storage.contacts.save(&contacts)?;

        info!(name = %contact.name, "added contact");
        Ok(contact)
    }

    /// List all contacts sorted by name, ignoring case
    pub fn list(&self) -> ContactResult<Vec<Contact>> {
        let mut contacts = self.storage.contacts.load()?;
        contacts.sort_by_key(|c| Contact::normalize_name(&c.name));
        Ok(contacts)
    }

    /// Find contacts whose name or phone contains the query, in store order
    pub fn search(&self, query: &str) -> ContactResult<Vec<Contact>> {
        Ok(self
            .storage
            .contacts
            .load()?
            .into_iter()
            .filter(|c| c.matches_query(query))
            .collect())
    }

    /// Delete every contact with this name
    ///
    /// Returns how many records were removed.
    pub fn delete(&self, name: &str) -> ContactResult<usize> {
        let contacts = self.storage.contacts.load()?;
        let original_len = contacts.len();

        let remaining: Vec<_> = contacts
            .into_iter()
            .filter(|c| !c.matches_name(name))
            .collect();

        if remaining.len() == original_len {
            return Err(ContactError::contact_not_found(name));
        }

        self.storage.contacts.save(&remaining)?;

        let removed = original_len - remaining.len();
        info!(name, removed, "deleted contact");
        Ok(removed)
    }

    /// Replace the phone of the first contact with this name
    pub fn update_phone(&self, name: &str, phone: &str) -> ContactResult<Contact> {
        self.edit(name, |_| Ok(phone.to_string()))
    }

    /// Edit the phone of the first contact with this name
    ///
    /// `new_phone` is only called once a match is found, with the current
    /// record. The store is saved only if the returned phone is valid.
    pub fn edit<F>(&self, name: &str, new_phone: F) -> ContactResult<Contact>
    where
        F: FnOnce(&Contact) -> ContactResult<String>,
    {
        let mut contacts = self.storage.contacts.load()?;

        let contact = contacts
            .iter_mut()
            .find(|c| c.matches_name(name))
            .ok_or_else(|| ContactError::contact_not_found(name))?;

        let phone = new_phone(contact)?;
        validate_phone(&phone).map_err(|e| ContactError::Validation(e.to_string()))?;

        contact.phone = phone;
        let updated = contact.clone();

        self.storage.contacts.save(&contacts)?;

        info!(name = %updated.name, "updated contact phone");
        Ok(updated)
    }
}
