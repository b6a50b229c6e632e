//! Custom error types for Pixell River banking
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Messages are meant for direct display, so every amount is rendered with
//! the same money formatting the accounts use.

use std::fmt;

use thiserror::Error;

use crate::models::money::Dollars;

/// Which balance operation rejected an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// The main error type for banking operations
#[derive(Error, Debug)]
pub enum BankError {
    /// An identifier was supplied that is not a whole number
    #[error("{field} must be of type int.")]
    NotWholeNumber { field: &'static str },

    /// A required name was empty after trimming
    #[error("{field} cannot be blank.")]
    BlankName { field: &'static str },

    /// A deposit or withdrawal amount could not be read as a number
    #[error("{kind} amount: {raw} must be numeric.")]
    NonNumericAmount { kind: TransactionKind, raw: String },

    /// A deposit or withdrawal amount was below zero
    #[error("{kind} amount: {amount} must be positive.")]
    NegativeAmount {
        kind: TransactionKind,
        amount: Dollars,
    },

    /// A withdrawal would take the balance below zero
    #[error("Withdrawal amount: {amount} must not exceed the account balance: {balance}")]
    ExceedsBalance { amount: Dollars, balance: Dollars },

    /// Detach was called with an observer that is not attached
    #[error("Observer is not attached to account {account_number}")]
    ObserverNotAttached { account_number: i64 },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BankError {
    /// Check if this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NotWholeNumber { .. }
                | Self::BlankName { .. }
                | Self::NonNumericAmount { .. }
                | Self::NegativeAmount { .. }
                | Self::ExceedsBalance { .. }
        )
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for banking operations
pub type BankResult<T> = Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_whole_number_display() {
        let err = BankError::NotWholeNumber {
            field: "Account number",
        };
        assert_eq!(err.to_string(), "Account number must be of type int.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_negative_amount_display() {
        let err = BankError::NegativeAmount {
            kind: TransactionKind::Deposit,
            amount: Dollars(-200.0),
        };
        assert_eq!(err.to_string(), "Deposit amount: $-200.00 must be positive.");
    }

    #[test]
    fn test_exceeds_balance_display() {
        let err = BankError::ExceedsBalance {
            amount: Dollars(2000.0),
            balance: Dollars(1000.0),
        };
        assert_eq!(
            err.to_string(),
            "Withdrawal amount: $2,000.00 must not exceed the account balance: $1,000.00"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bank_err: BankError = io_err.into();
        assert!(matches!(bank_err, BankError::Io(_)));
        assert!(!bank_err.is_validation());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let bank_err: BankError = json_err.into();
        assert!(matches!(bank_err, BankError::Json(_)));
        assert!(bank_err.to_string().starts_with("JSON error: "));
    }
}
