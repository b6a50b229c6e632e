//! Management fee service charge for investment accounts
//!
//! Accounts older than ten years have the fee waived. Age is judged by
//! calendar year: the account's creation year is compared with the year of
//! the "ten years ago" cutoff, not with the cutoff date itself.

use chrono::{Datelike, Duration, NaiveDate};

use super::{ServiceChargeStrategy, BASE_SERVICE_CHARGE};
use crate::models::field::today;
use crate::models::Account;

/// Whole days in ten years of 365.25 days; the trailing half day is dropped
const TEN_YEARS_IN_DAYS: i64 = 3652;

/// The date ten years (10 x 365.25 days) before `today`
pub fn ten_years_ago(today: NaiveDate) -> NaiveDate {
    today - Duration::days(TEN_YEARS_IN_DAYS)
}

/// Whether an account created on `date_created` has its fee waived
pub fn fee_waived(cutoff: NaiveDate, date_created: NaiveDate) -> bool {
    cutoff.year() > date_created.year()
}

/// Adds the management fee to the base charge unless the account is old enough
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagementFeeStrategy {
    date_created: NaiveDate,
    management_fee: f64,
    cutoff: NaiveDate,
}

impl ManagementFeeStrategy {
    /// Build the strategy, fixing the ten-year cutoff at today's date
    pub fn new(date_created: NaiveDate, management_fee: f64) -> Self {
        Self::with_cutoff(date_created, management_fee, ten_years_ago(today()))
    }

    /// Build the strategy against an explicit cutoff date
    pub fn with_cutoff(date_created: NaiveDate, management_fee: f64, cutoff: NaiveDate) -> Self {
        Self {
            date_created,
            management_fee,
            cutoff,
        }
    }

    pub fn management_fee(&self) -> f64 {
        self.management_fee
    }

    /// Get the date an account must predate, by calendar year, to skip the fee
    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }
}

impl ServiceChargeStrategy for ManagementFeeStrategy {
    fn calculate_service_charges(&self, _account: &Account) -> f64 {
        if fee_waived(self.cutoff, self.date_created) {
            BASE_SERVICE_CHARGE
        } else {
            BASE_SERVICE_CHARGE + self.management_fee
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn account() -> Account {
        Account::new(22, 42, 500.0, ymd(2020, 1, 1)).unwrap()
    }

    #[test]
    fn test_ten_years_ago() {
        assert_eq!(ten_years_ago(ymd(2026, 10, 19)), ymd(2016, 10, 19));
    }

    #[test]
    fn test_fee_waived_only_across_year_boundary() {
        let cutoff = ymd(2016, 10, 19);
        assert!(fee_waived(cutoff, ymd(2015, 12, 31)));
        assert!(!fee_waived(cutoff, ymd(2016, 1, 1)));
        assert!(!fee_waived(cutoff, cutoff));
    }

    #[test]
    fn test_recent_account_pays_fee() {
        let cutoff = ymd(2016, 10, 19);
        let strategy = ManagementFeeStrategy::with_cutoff(ymd(2020, 5, 5), 2.55, cutoff);
        let charge = strategy.calculate_service_charges(&account());
        assert!((charge - 3.05).abs() < 1e-9);
    }

    #[test]
    fn test_old_account_fee_waived() {
        let cutoff = ymd(2016, 10, 19);
        let strategy = ManagementFeeStrategy::with_cutoff(ymd(2010, 5, 5), 2.55, cutoff);
        assert_eq!(strategy.calculate_service_charges(&account()), 0.5);
    }

    #[test]
    fn test_new_uses_today() {
        let strategy = ManagementFeeStrategy::new(today(), 10.0);
        assert_eq!(strategy.cutoff(), ten_years_ago(today()));
        assert_eq!(strategy.calculate_service_charges(&account()), 10.5);
    }
}
