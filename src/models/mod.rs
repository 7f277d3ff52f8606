//! Core data models for the contact book

pub mod contact;

pub use contact::{
    is_valid_phone, validate_name, validate_phone, Contact, ContactValidationError, PHONE_LENGTH,
};
