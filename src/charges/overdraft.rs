//! Overdraft service charge for chequing accounts

use super::{ServiceChargeStrategy, BASE_SERVICE_CHARGE};
use crate::models::Account;

/// Charges a rate on every dollar the balance sits below the overdraft limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverdraftStrategy {
    overdraft_limit: f64,
    overdraft_rate: f64,
}

impl OverdraftStrategy {
    /// Build the strategy from a (usually negative) limit and a per-dollar rate
    pub fn new(overdraft_limit: f64, overdraft_rate: f64) -> Self {
        Self {
            overdraft_limit,
            overdraft_rate,
        }
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }

    pub fn overdraft_rate(&self) -> f64 {
        self.overdraft_rate
    }
}

impl ServiceChargeStrategy for OverdraftStrategy {
    fn calculate_service_charges(&self, account: &Account) -> f64 {
        let balance = account.balance();

        // Sitting exactly on the limit is not overdrawn
        if balance >= self.overdraft_limit {
            BASE_SERVICE_CHARGE
        } else {
            BASE_SERVICE_CHARGE + (self.overdraft_limit - balance) * self.overdraft_rate
        }
    }
}
