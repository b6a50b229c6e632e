//! Minimum balance service charge for savings accounts

use super::{ServiceChargeStrategy, BASE_SERVICE_CHARGE};
use crate::models::Account;

/// Multiplier applied to the base charge when the minimum is not met
pub const SERVICE_CHARGE_PREMIUM: f64 = 2.0;

/// Doubles the base charge while the balance is under the minimum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumBalanceStrategy {
    minimum_balance: f64,
}

impl MinimumBalanceStrategy {
    pub fn new(minimum_balance: f64) -> Self {
        Self { minimum_balance }
    }

    pub fn minimum_balance(&self) -> f64 {
        self.minimum_balance
    }
}

impl ServiceChargeStrategy for MinimumBalanceStrategy {
    fn calculate_service_charges(&self, account: &Account) -> f64 {
        if account.balance() >= self.minimum_balance {
            BASE_SERVICE_CHARGE
        } else {
            BASE_SERVICE_CHARGE * SERVICE_CHARGE_PREMIUM
        }
    }
}
