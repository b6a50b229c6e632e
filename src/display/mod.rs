//! Display formatting for terminal output
//!
//! Turns accounts and clients into the text the `pixell` binary prints.

pub mod account;

pub use account::{format_account_report, format_transaction_error};
