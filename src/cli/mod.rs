//! CLI command handlers
//!
//! Bridges clap argument parsing with the account model. The CLI is just
//! another consumer of the core: raw text goes in through the same
//! coercion rules a loader would use.

pub mod account;

pub use account::{handle_account_command, AccountCommands};
