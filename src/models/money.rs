//! Money formatting for account balances and charges
//!
//! Balances are floating-point values. Every monetary value shown to a user
//! goes through [`Dollars`], which renders a `$`, the sign, a thousands
//! separator and exactly two decimal places (`$1,000.00`, `$-150.00`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dollar amount wrapped for display
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f64);

impl Dollars {
    /// Get the raw amount
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Format a number with a thousands separator and two decimals, no symbol
    ///
    /// # Examples
    /// ```
    /// use pixell_bank::models::Dollars;
    /// assert_eq!(Dollars::grouped(1234567.891), "1,234,567.89");
    /// assert_eq!(Dollars::grouped(-150.0), "-150.00");
    /// ```
    pub fn grouped(value: f64) -> String {
        let fixed = format!("{:.2}", value);

        let (sign, digits) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };

        // Non-finite values have no decimal point to split on
        let (whole, fraction) = match digits.split_once('.') {
            Some(parts) => parts,
            None => return fixed,
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{}{}.{}", sign, grouped, fraction)
    }

    /// Format a rate (0.05) as a percentage (`5.00%`)
    pub fn percent(rate: f64) -> String {
        format!("{:.2}%", rate * 100.0)
    }
}

impl From<f64> for Dollars {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", Self::grouped(self.0))
    }
}
