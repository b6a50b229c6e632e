//! Savings account

use std::fmt;

use super::account::{Account, AccountType, BankAccount};
use super::field::{float_or, FieldValue};
use super::money::Dollars;
use crate::charges::{MinimumBalanceStrategy, ServiceChargeStrategy};
use crate::error::BankResult;

pub const DEFAULT_MINIMUM_BALANCE: f64 = 50.0;

/// A savings account that must hold a minimum balance
#[derive(Debug)]
pub struct SavingsAccount {
    account: Account,
    strategy: MinimumBalanceStrategy,
}

impl SavingsAccount {
    /// Create a savings account; a non-numeric minimum balance becomes 50
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
        minimum_balance: impl Into<FieldValue>,
    ) -> BankResult<Self> {
        let account = Account::new(account_number, client_number, balance, date_created)?;
        let minimum_balance = float_or(
            &minimum_balance.into(),
            DEFAULT_MINIMUM_BALANCE,
            "minimum_balance",
        )
        .value;

        Ok(Self {
            account,
            strategy: MinimumBalanceStrategy::new(minimum_balance),
        })
    }

    /// Get the minimum balance
    pub fn minimum_balance(&self) -> f64 {
        self.strategy.minimum_balance()
    }
}

impl BankAccount for SavingsAccount {
    fn account(&self) -> &Account {
        &self.account
    }

    fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn account_type(&self) -> AccountType {
        AccountType::Savings
    }

    fn get_service_charges(&self) -> f64 {
        self.strategy.calculate_service_charges(&self.account)
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nMinimum Balance: {} Account Type: {}",
            self.account,
            Dollars(self.minimum_balance()),
            self.account_type()
        )
    }
}
