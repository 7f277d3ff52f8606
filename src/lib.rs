//! Contacts - terminal contact book
//!
//! This library provides the core functionality for the `contacts` binary:
//! a single-user store of name/phone pairs kept in a plain text file, with
//! CSV export/import and a backup copy.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The contact record and its validation rules
//! - `storage`: Line-delimited file storage with atomic writes
//! - `services`: Business logic (add, view, search, edit, delete, import)
//! - `export`: CSV export
//! - `backup`: Backup and restore
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use contacts::config::{ContactPaths, Settings};
//! use contacts::services::ContactService;
//! use contacts::storage::Storage;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//!
//! ContactService::new(&storage).add("Alice", "5551234567")?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactError, ContactResult};
