//! Service charge strategies
//!
//! Each account variant owns one strategy, built from its own thresholds when
//! the account is constructed. A strategy reads the account's current state
//! and returns the charge; it never mutates the account.

pub mod management_fee;
pub mod minimum_balance;
pub mod overdraft;

pub use management_fee::{fee_waived, ten_years_ago, ManagementFeeStrategy};
pub use minimum_balance::MinimumBalanceStrategy;
pub use overdraft::OverdraftStrategy;

use crate::models::Account;

/// The charge every account pays when nothing else applies
pub const BASE_SERVICE_CHARGE: f64 = 0.5;

/// Computes the service charge for an account
pub trait ServiceChargeStrategy {
    /// Calculate the charge given the account's current state
    fn calculate_service_charges(&self, account: &Account) -> f64;
}
