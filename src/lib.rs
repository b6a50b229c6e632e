//! Pixell River banking core
//!
//! Bank accounts with pluggable service charges and alert notifications.
//! Each account variant owns a service charge strategy; clients attach to
//! accounts as observers and receive an email whenever a balance change
//! crosses an alert threshold.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Accounts, clients, money formatting and raw field coercion
//! - `charges`: Service charge strategies
//! - `observer`: Subject/observer plumbing
//! - `mail`: Outbound email hand-off
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `display` and `cli`: Terminal front end for the `pixell` binary
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use chrono::NaiveDate;
//! use pixell_bank::models::{BankAccount, ChequingAccount, Client};
//!
//! let client = Rc::new(Client::new(12345, "Dylan", "Kaspick", "dylan@rrc.ca")?);
//! let created = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let mut chequing = ChequingAccount::new(22, 12345, 500.0, created, -100.0, 0.05)?;
//! chequing.attach(client.clone());
//!
//! chequing.withdraw(480)?;
//! assert_eq!(chequing.get_service_charges(), 0.5);
//! # Ok::<(), pixell_bank::BankError>(())
//! ```

pub mod charges;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod mail;
pub mod models;
pub mod observer;

pub use error::{BankError, BankResult};
