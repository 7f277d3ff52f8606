//! Contact model
//!
//! A contact is a name and a ten-digit phone number. Contacts are identified
//! by their name compared case-insensitively.

use std::fmt;

/// Number of digits a valid phone number must have
pub const PHONE_LENGTH: usize = 10;

/// A single entry in the contact book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Display name, case preserved
    pub name: String,

    /// Phone number as entered
    pub phone: String,
}

impl Contact {
    /// Create a new contact without validating either field
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Validate both fields, phone first
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        validate_phone(&self.phone)?;
        validate_name(&self.name)
    }

    /// Normalize a name for matching and sorting
    pub fn normalize_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// Check if this contact has the given name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Check if a search query hits this contact
    ///
    /// The name is matched case-insensitively, the phone exactly.
    pub fn matches_query(&self, query: &str) -> bool {
        Self::normalize_name(&self.name).contains(&Self::normalize_name(query))
            || self.phone.contains(query)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Phone: {}", self.name, self.phone)
    }
}

/// Check whether a phone number is exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_LENGTH && phone.chars().all(|c| c.is_ascii_digit())
}

/// Validate a phone number
pub fn validate_phone(phone: &str) -> Result<(), ContactValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ContactValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Validate a name for storage in the line format
///
/// Stored lines are trimmed on load, so a name must not start or end with
/// whitespace.
pub fn validate_name(name: &str) -> Result<(), ContactValidationError> {
    if name.trim().is_empty() {
        return Err(ContactValidationError::EmptyName);
    }

    if name.trim() != name {
        return Err(ContactValidationError::SurroundingWhitespace);
    }

    if let Some(c) = name.chars().find(|c| matches!(c, ',' | '\n' | '\r')) {
        return Err(ContactValidationError::ForbiddenCharacter(c));
    }

    Ok(())
}

/// Validation errors for contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    InvalidPhone(String),
    EmptyName,
    SurroundingWhitespace,
    ForbiddenCharacter(char),
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number {:?}: please enter a {}-digit number",
                phone, PHONE_LENGTH
            ),
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "Contact name cannot start or end with whitespace")
            }
            Self::ForbiddenCharacter(c) => {
                write!(f, "Contact name cannot contain {:?}", c)
            }
        }
    }
}

impl std::error::Error for ContactValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("0000000000"));
    }

    #[test]
    fn test_invalid_phone() {
        assert!(!is_valid_phone("123-456-7890"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone(" 123456789"));
        assert!(!is_valid_phone("+123456789"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric but not decimal ASCII
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let contact = Contact::new("Alice", "1234567890");
        assert!(contact.matches_name("alice"));
        assert!(contact.matches_name("ALICE"));
        assert!(!contact.matches_name("Alic"));
    }

    #[test]
    fn test_matches_query() {
        let contact = Contact::new("Alice", "5551234567");
        assert!(contact.matches_query("ali"));
        assert!(contact.matches_query("LIC"));
        assert!(contact.matches_query("555"));
        assert!(contact.matches_query("4567"));
        assert!(!contact.matches_query("bob"));
        assert!(!contact.matches_query("999"));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Alice").is_ok());
        assert_eq!(validate_name("   "), Err(ContactValidationError::EmptyName));
        assert_eq!(
            validate_name("Smith, John"),
            Err(ContactValidationError::ForbiddenCharacter(','))
        );
        assert_eq!(
            validate_name("two\nlines"),
            Err(ContactValidationError::ForbiddenCharacter('\n'))
        );
        assert_eq!(
            validate_name(" Alice"),
            Err(ContactValidationError::SurroundingWhitespace)
        );
        assert_eq!(
            validate_name("Alice\t"),
            Err(ContactValidationError::SurroundingWhitespace)
        );
        assert!(validate_name("Mary Ann").is_ok());
    }

    #[test]
    fn test_validate_checks_phone_first() {
        let contact = Contact::new("", "12345");
        assert!(matches!(
            contact.validate(),
            Err(ContactValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_display() {
        let contact = Contact::new("Bob", "1112223333");
        assert_eq!(contact.to_string(), "Name: Bob, Phone: 1112223333");
    }
}
