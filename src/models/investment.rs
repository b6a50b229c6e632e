//! Investment account
//!
//! Pays a flat management fee unless the account was opened in a calendar
//! year before the ten-year cutoff. The display text re-evaluates the cutoff
//! each time it is rendered, using the same year rule as the fee strategy.

use std::fmt;

use super::account::{Account, AccountType, BankAccount};
use super::field::{float_or, today, FieldValue};
use super::money::Dollars;
use crate::charges::{fee_waived, ten_years_ago, ManagementFeeStrategy, ServiceChargeStrategy};
use crate::error::BankResult;

pub const DEFAULT_MANAGEMENT_FEE: f64 = 2.55;

/// An investment account with a management fee
#[derive(Debug)]
pub struct InvestmentAccount {
    account: Account,
    strategy: ManagementFeeStrategy,
}

impl InvestmentAccount {
    /// Create an investment account; a non-numeric fee becomes 2.55
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
        management_fee: impl Into<FieldValue>,
    ) -> BankResult<Self> {
        let account = Account::new(account_number, client_number, balance, date_created)?;
        let management_fee = float_or(
            &management_fee.into(),
            DEFAULT_MANAGEMENT_FEE,
            "management_fee",
        )
        .value;
        let strategy = ManagementFeeStrategy::new(account.date_created(), management_fee);

        Ok(Self { account, strategy })
    }

    /// Get the management fee
    pub fn management_fee(&self) -> f64 {
        self.strategy.management_fee()
    }
}

impl BankAccount for InvestmentAccount {
    fn account(&self) -> &Account {
        &self.account
    }

    fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn account_type(&self) -> AccountType {
        AccountType::Investment
    }

    fn get_service_charges(&self) -> f64 {
        self.strategy.calculate_service_charges(&self.account)
    }
}

impl fmt::Display for InvestmentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date_created = self.date_created();
        let fee = if fee_waived(ten_years_ago(today()), date_created) {
            "Waived".to_string()
        } else {
            Dollars(self.management_fee()).to_string()
        };

        write!(
            f,
            "{}\nDate Created: {} Management Fee: {} Account Type: {}",
            self.account,
            date_created,
            fee,
            self.account_type()
        )
    }
}
