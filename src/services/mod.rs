//! Service layer for the contact book
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, duplicate detection and lookups by name.

pub mod contact;
pub mod import;

pub use contact::ContactService;
pub use import::ImportService;
