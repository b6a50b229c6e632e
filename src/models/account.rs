//! Account model
//!
//! [`Account`] holds the state every bank account shares and is the only
//! place a balance changes. The concrete variants (chequing, savings,
//! investment) wrap it, add their own terms and own a service charge
//! strategy. [`BankAccount`] is the interface they share.

use chrono::NaiveDate;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

use super::chequing::ChequingAccount;
use super::field::{as_number, date_or_today, float_or, whole_number, FieldValue};
use super::investment::InvestmentAccount;
use super::money::Dollars;
use super::savings::SavingsAccount;
use crate::error::{BankError, BankResult, TransactionKind};
use crate::observer::{Observer, ObserverList, Subject};

/// A single transaction above this amount alerts observers
pub const LARGE_TRANSACTION_THRESHOLD: f64 = 9999.99;

/// A balance below this level alerts observers
pub const LOW_BALANCE_LEVEL: f64 = 50.0;

/// Kind of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Chequing,
    Savings,
    Investment,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chequing => write!(f, "Chequing"),
            Self::Savings => write!(f, "Savings"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

/// State and balance rules shared by every account
#[derive(Debug)]
pub struct Account {
    account_number: i64,
    client_number: i64,
    balance: f64,
    date_created: NaiveDate,
    observers: ObserverList,
}

impl Account {
    /// Create an account from raw field values
    ///
    /// A balance that is not numeric becomes 0.0 and a creation date that is
    /// not a date becomes today.
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
    ) -> BankResult<Self> {
        let account_number =
            whole_number(&account_number.into()).ok_or(BankError::NotWholeNumber {
                field: "Account number",
            })?;

        let client_number =
            whole_number(&client_number.into()).ok_or(BankError::NotWholeNumber {
                field: "Client number",
            })?;

        let balance = float_or(&balance.into(), 0.0, "balance").value;
        let date_created = date_or_today(&date_created.into()).value;

        Ok(Self {
            account_number,
            client_number,
            balance,
            date_created,
            observers: ObserverList::new(),
        })
    }

    /// Get the account number
    pub fn account_number(&self) -> i64 {
        self.account_number
    }

    /// Get the number of the client who owns the account
    pub fn client_number(&self) -> i64 {
        self.client_number
    }

    /// Get the current balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Get the creation date
    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    /// Number of attached observers that are still alive
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Add a signed amount to the balance and raise any alerts
    ///
    /// A non-numeric amount leaves the balance unchanged. The low-balance and
    /// large-transaction checks are independent; either, both or neither may
    /// fire.
    pub fn update_balance(&mut self, amount: impl Into<FieldValue>) {
        let amount = amount.into();
        let applied = as_number(&amount).unwrap_or_else(|| {
            debug!(
                account_number = self.account_number,
                input = %amount,
                "Ignoring non-numeric balance update"
            );
            0.0
        });

        self.balance += applied;

        if self.balance < LOW_BALANCE_LEVEL {
            self.notify(&format!(
                "Low balance warning {}: on account {}.",
                Dollars(self.balance),
                self.account_number
            ));
        }

        if applied > LARGE_TRANSACTION_THRESHOLD {
            self.notify(&format!(
                "Large transaction {} on account {}.",
                Dollars(applied),
                self.account_number
            ));
        }
    }

    /// Deposit a non-negative amount
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not a finite number or is negative.
    /// The balance is unchanged on error.
    pub fn deposit(&mut self, amount: impl Into<FieldValue>) -> BankResult<()> {
        let amount = checked_amount(TransactionKind::Deposit, amount.into())?;
        self.update_balance(amount);
        Ok(())
    }

    /// Withdraw a non-negative amount no larger than the balance
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not a finite number, is negative, or
    /// would take the balance below zero. The balance is unchanged on error.
    pub fn withdraw(&mut self, amount: impl Into<FieldValue>) -> BankResult<()> {
        let amount = checked_amount(TransactionKind::Withdrawal, amount.into())?;

        if self.balance - amount < 0.0 {
            return Err(BankError::ExceedsBalance {
                amount: Dollars(amount),
                balance: Dollars(self.balance),
            });
        }

        self.update_balance(-amount);
        Ok(())
    }
}

/// Numeric and sign checks shared by deposit and withdraw
fn checked_amount(kind: TransactionKind, amount: FieldValue) -> BankResult<f64> {
    let value = as_number(&amount).ok_or_else(|| BankError::NonNumericAmount {
        kind,
        raw: amount.to_string(),
    })?;

    if value < 0.0 {
        return Err(BankError::NegativeAmount {
            kind,
            amount: Dollars(value),
        });
    }

    Ok(value)
}

impl Subject for Account {
    fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(&observer);
    }

    fn detach(&mut self, observer: Rc<dyn Observer>) -> BankResult<()> {
        if self.observers.remove(&observer) {
            Ok(())
        } else {
            Err(BankError::ObserverNotAttached {
                account_number: self.account_number,
            })
        }
    }

    fn notify(&self, message: &str) {
        let delivered = self.observers.notify(message);
        info!(
            account_number = self.account_number,
            delivered, message, "Account alert"
        );
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number: {} Balance: {}",
            self.account_number,
            Dollars(self.balance)
        )
    }
}

/// Interface shared by the concrete account variants
pub trait BankAccount: fmt::Display {
    /// The shared account state
    fn account(&self) -> &Account;

    /// Mutable access to the shared account state
    fn account_mut(&mut self) -> &mut Account;

    fn account_type(&self) -> AccountType;

    /// Service charge computed by the account's own strategy
    fn get_service_charges(&self) -> f64;

    fn account_number(&self) -> i64 {
        self.account().account_number()
    }

    fn client_number(&self) -> i64 {
        self.account().client_number()
    }

    fn balance(&self) -> f64 {
        self.account().balance()
    }

    fn date_created(&self) -> NaiveDate {
        self.account().date_created()
    }

    /// See [`Account::deposit`]
    fn deposit(&mut self, amount: impl Into<FieldValue>) -> BankResult<()>
    where
        Self: Sized,
    {
        self.account_mut().deposit(amount)
    }

    /// See [`Account::withdraw`]
    fn withdraw(&mut self, amount: impl Into<FieldValue>) -> BankResult<()>
    where
        Self: Sized,
    {
        self.account_mut().withdraw(amount)
    }

    fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.account_mut().attach(observer);
    }

    /// # Errors
    ///
    /// Returns an error if the observer is not attached.
    fn detach(&mut self, observer: Rc<dyn Observer>) -> BankResult<()> {
        self.account_mut().detach(observer)
    }
}

/// Any one of the account variants
#[derive(Debug)]
pub enum AnyAccount {
    Chequing(ChequingAccount),
    Savings(SavingsAccount),
    Investment(InvestmentAccount),
}

impl BankAccount for AnyAccount {
    fn account(&self) -> &Account {
        match self {
            Self::Chequing(a) => a.account(),
            Self::Savings(a) => a.account(),
            Self::Investment(a) => a.account(),
        }
    }

    fn account_mut(&mut self) -> &mut Account {
        match self {
            Self::Chequing(a) => a.account_mut(),
            Self::Savings(a) => a.account_mut(),
            Self::Investment(a) => a.account_mut(),
        }
    }

    fn account_type(&self) -> AccountType {
        match self {
            Self::Chequing(_) => AccountType::Chequing,
            Self::Savings(_) => AccountType::Savings,
            Self::Investment(_) => AccountType::Investment,
        }
    }

    fn get_service_charges(&self) -> f64 {
        match self {
            Self::Chequing(a) => a.get_service_charges(),
            Self::Savings(a) => a.get_service_charges(),
            Self::Investment(a) => a.get_service_charges(),
        }
    }
}

impl fmt::Display for AnyAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chequing(a) => fmt::Display::fmt(a, f),
            Self::Savings(a) => fmt::Display::fmt(a, f),
            Self::Investment(a) => fmt::Display::fmt(a, f),
        }
    }
}

impl From<ChequingAccount> for AnyAccount {
    fn from(account: ChequingAccount) -> Self {
        Self::Chequing(account)
    }
}

impl From<SavingsAccount> for AnyAccount {
    fn from(account: SavingsAccount) -> Self {
        Self::Savings(account)
    }
}

impl From<InvestmentAccount> for AnyAccount {
    fn from(account: InvestmentAccount) -> Self {
        Self::Investment(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Inbox {
        messages: RefCell<Vec<String>>,
    }

    impl Observer for Inbox {
        fn update(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn account(balance: impl Into<FieldValue>) -> Account {
        Account::new(22, 8, balance, NaiveDate::from_ymd_opt(2020, 1, 1)).unwrap()
    }

    #[test]
    fn test_new_sets_fields() {
        let account = account(1000);
        assert_eq!(account.account_number(), 22);
        assert_eq!(account.client_number(), 8);
        assert_eq!(account.balance(), 1000.0);
        assert_eq!(
            account.date_created(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_non_numeric_balance_defaults_to_zero() {
        assert_eq!(account("number").balance(), 0.0);
    }

    #[test]
    fn test_invalid_date_defaults_to_today() {
        let account = Account::new(22, 8, 1000, "not a date").unwrap();
        assert_eq!(account.date_created(), crate::models::field::today());
    }

    #[test]
    fn test_non_integer_account_number() {
        let err = Account::new("x", 8, 1000, FieldValue::Missing).unwrap_err();
        assert_eq!(err.to_string(), "Account number must be of type int.");
    }

    #[test]
    fn test_non_integer_client_number() {
        let err = Account::new(22, 8.5, 1000, FieldValue::Missing).unwrap_err();
        assert_eq!(err.to_string(), "Client number must be of type int.");
    }

    #[test]
    fn test_update_balance() {
        let mut account = account(1000);
        account.update_balance(200);
        assert_eq!(account.balance(), 1200.0);
        account.update_balance(-400);
        assert_eq!(account.balance(), 800.0);
        account.update_balance("number");
        assert_eq!(account.balance(), 800.0);
    }

    #[test]
    fn test_deposit_and_withdraw() {
        let mut account = account(1000);
        account.deposit(200).unwrap();
        assert_eq!(account.balance(), 1200.0);
        account.withdraw(200).unwrap();
        assert_eq!(account.balance(), 1000.0);
    }

    #[test]
    fn test_deposit_negative() {
        let mut account = account(1000);
        let err = account.deposit(-200).unwrap_err();
        assert_eq!(err.to_string(), "Deposit amount: $-200.00 must be positive.");
        assert_eq!(account.balance(), 1000.0);
    }

    #[test]
    fn test_deposit_non_numeric() {
        let mut account = account(1000);
        let err = account.deposit("ten").unwrap_err();
        assert_eq!(err.to_string(), "Deposit amount: ten must be numeric.");
        assert_eq!(account.balance(), 1000.0);
    }

    #[test]
    fn test_withdraw_negative() {
        let mut account = account(1000);
        let err = account.withdraw(-200).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Withdrawal amount: $-200.00 must be positive."
        );
        assert_eq!(account.balance(), 1000.0);
    }

    #[test]
    fn test_withdraw_exceeding_balance() {
        let mut account = account(1000);
        let err = account.withdraw(2000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Withdrawal amount: $2,000.00 must not exceed the account balance: $1,000.00"
        );
        assert_eq!(account.balance(), 1000.0);
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = account(1000);
        account.withdraw(1000).unwrap();
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            account(1000).to_string(),
            "Account Number: 22 Balance: $1,000.00"
        );
    }

    #[test]
    fn test_low_balance_alert() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(100);
        account.attach(inbox.clone());

        account.withdraw(60).unwrap();

        assert_eq!(
            *inbox.messages.borrow(),
            vec!["Low balance warning $40.00: on account 22."]
        );
    }

    #[test]
    fn test_no_alert_for_ordinary_transaction() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(1000);
        account.attach(inbox.clone());

        account.deposit(500).unwrap();
        account.withdraw(500).unwrap();

        assert!(inbox.messages.borrow().is_empty());
    }

    #[test]
    fn test_large_transaction_alert() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(100);
        account.attach(inbox.clone());

        account.deposit(12000).unwrap();

        assert_eq!(
            *inbox.messages.borrow(),
            vec!["Large transaction $12,000.00 on account 22."]
        );
    }

    #[test]
    fn test_large_withdrawal_does_not_count_as_large_transaction() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(20000);
        account.attach(inbox.clone());

        account.withdraw(15000).unwrap();

        assert!(inbox.messages.borrow().is_empty());
    }

    #[test]
    fn test_both_alerts_fire() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(-20000);
        account.attach(inbox.clone());

        account.update_balance(10000);

        let messages = inbox.messages.borrow();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Low balance warning $-10,000.00"));
        assert!(messages[1].starts_with("Large transaction $10,000.00"));
    }

    #[test]
    fn test_detach() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(100);
        account.attach(inbox.clone());
        assert_eq!(account.observer_count(), 1);

        account.detach(inbox.clone()).unwrap();
        assert_eq!(account.observer_count(), 0);

        account.withdraw(90).unwrap();
        assert!(inbox.messages.borrow().is_empty());

        let err = account.detach(inbox.clone()).unwrap_err();
        assert!(matches!(
            err,
            BankError::ObserverNotAttached { account_number: 22 }
        ));
    }

    #[test]
    fn test_balance_exactly_at_low_level_does_not_alert() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(0);
        account.attach(inbox.clone());

        account.deposit(LOW_BALANCE_LEVEL).unwrap();
        assert_eq!(account.balance(), 50.0);
        assert!(inbox.messages.borrow().is_empty());

        account.withdraw(0.01).unwrap();
        assert_eq!(
            *inbox.messages.borrow(),
            vec!["Low balance warning $49.99: on account 22."]
        );
    }

    #[test]
    fn test_large_transaction_threshold_is_exclusive() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(100);
        account.attach(inbox.clone());

        account.deposit(LARGE_TRANSACTION_THRESHOLD).unwrap();
        assert!(inbox.messages.borrow().is_empty());

        account.deposit(9999.991).unwrap();
        assert_eq!(
            *inbox.messages.borrow(),
            vec!["Large transaction $9,999.99 on account 22."]
        );
    }

    #[test]
    fn test_non_numeric_update_still_checks_low_balance() {
        let inbox = Rc::new(Inbox::default());
        let mut account = account(40);
        account.attach(inbox.clone());

        account.update_balance("number");

        assert_eq!(account.balance(), 40.0);
        assert_eq!(
            *inbox.messages.borrow(),
            vec!["Low balance warning $40.00: on account 22."]
        );
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let mut account = account(1000);

        let err = account.withdraw("nan").unwrap_err();
        assert_eq!(err.to_string(), "Withdrawal amount: nan must be numeric.");

        let err = account.deposit("inf").unwrap_err();
        assert_eq!(err.to_string(), "Deposit amount: inf must be numeric.");

        assert!(account.deposit(f64::NAN).is_err());
        assert_eq!(account.balance(), 1000.0);
    }

    #[test]
    fn test_dropped_observer_is_not_counted() {
        let mut account = account(100);
        account.attach(Rc::new(Inbox::default()));
        assert_eq!(account.observer_count(), 0);

        let inbox = Rc::new(Inbox::default());
        account.attach(inbox.clone());
        assert_eq!(account.observer_count(), 1);
    }

    #[test]
    fn test_account_type_display() {
        assert_eq!(AccountType::Chequing.to_string(), "Chequing");
        assert_eq!(AccountType::Investment.to_string(), "Investment");
    }
}
