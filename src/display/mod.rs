//! Display formatting for terminal output

pub mod contact;

pub use contact::{format_backup_info, format_contact_list, format_search_results};
