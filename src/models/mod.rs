//! Core data models for Pixell River banking
//!
//! This module contains the account hierarchy, the client that observes
//! accounts, money formatting and the loose field values used to build them.

pub mod account;
pub mod chequing;
pub mod client;
pub mod field;
pub mod investment;
pub mod money;
pub mod savings;

pub use account::{
    Account, AccountType, AnyAccount, BankAccount, LARGE_TRANSACTION_THRESHOLD, LOW_BALANCE_LEVEL,
};
pub use chequing::ChequingAccount;
pub use client::{Client, FALLBACK_EMAIL};
pub use field::{Coerced, FieldValue};
pub use investment::InvestmentAccount;
pub use money::Dollars;
pub use savings::SavingsAccount;
