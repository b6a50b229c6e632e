//! Chequing account
//!
//! Carries an overdraft limit and rate; service charges grow with how far the
//! balance sits below the limit.

use std::fmt;

use super::account::{Account, AccountType, BankAccount};
use super::field::{float_or, FieldValue};
use super::money::Dollars;
use crate::charges::{OverdraftStrategy, ServiceChargeStrategy};
use crate::error::BankResult;

pub const DEFAULT_OVERDRAFT_LIMIT: f64 = -100.0;
pub const DEFAULT_OVERDRAFT_RATE: f64 = 0.05;

/// A chequing account with overdraft terms
#[derive(Debug)]
pub struct ChequingAccount {
    account: Account,
    strategy: OverdraftStrategy,
}

impl ChequingAccount {
    /// Create a chequing account
    ///
    /// A non-numeric overdraft limit or rate falls back to -100 and 0.05.
    ///
    /// # Errors
    ///
    /// Returns an error if the account number or client number is not a
    /// whole number.
    pub fn new(
        account_number: impl Into<FieldValue>,
        client_number: impl Into<FieldValue>,
        balance: impl Into<FieldValue>,
        date_created: impl Into<FieldValue>,
        overdraft_limit: impl Into<FieldValue>,
        overdraft_rate: impl Into<FieldValue>,
    ) -> BankResult<Self> {
        let account = Account::new(account_number, client_number, balance, date_created)?;

        let overdraft_limit = float_or(
            &overdraft_limit.into(),
            DEFAULT_OVERDRAFT_LIMIT,
            "overdraft_limit",
        )
        .value;
        let overdraft_rate = float_or(
            &overdraft_rate.into(),
            DEFAULT_OVERDRAFT_RATE,
            "overdraft_rate",
        )
        .value;

        Ok(Self {
            account,
            strategy: OverdraftStrategy::new(overdraft_limit, overdraft_rate),
        })
    }

    /// Get the overdraft limit
    pub fn overdraft_limit(&self) -> f64 {
        self.strategy.overdraft_limit()
    }

    /// Get the rate charged per dollar below the overdraft limit
    pub fn overdraft_rate(&self) -> f64 {
        self.strategy.overdraft_rate()
    }
}

impl BankAccount for ChequingAccount {
    fn account(&self) -> &Account {
        &self.account
    }

    fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn account_type(&self) -> AccountType {
        AccountType::Chequing
    }

    fn get_service_charges(&self) -> f64 {
        self.strategy.calculate_service_charges(&self.account)
    }
}

impl fmt::Display for ChequingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nOverdraft Limit: {} Overdraft Rate: {} Account Type: {}",
            self.account,
            Dollars(self.overdraft_limit()),
            Dollars::percent(self.overdraft_rate()),
            self.account_type()
        )
    }
}
