//! Account CLI commands
//!
//! Each command opens one account, optionally attaches a client to receive
//! alerts, applies the requested transactions in order and prints the
//! resulting account with its service charge.

use std::rc::Rc;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_account_report, format_transaction_error};
use crate::error::{BankResult, TransactionKind};
use crate::mail::LogMailer;
use crate::models::{
    AnyAccount, BankAccount, ChequingAccount, Client, FieldValue, InvestmentAccount,
    SavingsAccount,
};

/// One requested deposit or withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: TransactionKind,
    /// Raw amount text; numeric checks happen in the account
    pub amount: String,
}

impl FromStr for Transaction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected deposit=AMOUNT or withdraw=AMOUNT, got '{}'", s))?;

        let kind = match kind.trim().to_lowercase().as_str() {
            "deposit" | "d" => TransactionKind::Deposit,
            "withdraw" | "withdrawal" | "w" => TransactionKind::Withdrawal,
            other => return Err(format!("Unknown transaction type: '{}'", other)),
        };

        Ok(Self {
            kind,
            amount: amount.trim().to_string(),
        })
    }
}

/// Arguments shared by every account type
#[derive(Args, Debug)]
pub struct AccountArgs {
    /// Account number
    #[arg(long, allow_hyphen_values = true)]
    pub account: i64,
    /// Client number
    #[arg(long, allow_hyphen_values = true)]
    pub client: i64,
    /// Opening balance; non-numeric input becomes 0
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub balance: String,
    /// Date created (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub created: Option<String>,
    /// Transaction to apply, in order (deposit=AMOUNT or withdraw=AMOUNT)
    #[arg(short = 't', long = "txn", allow_hyphen_values = true)]
    pub transactions: Vec<Transaction>,
    /// First name of a client to alert
    #[arg(long, requires = "last_name")]
    pub first_name: Option<String>,
    /// Last name of a client to alert
    #[arg(long, requires = "first_name")]
    pub last_name: Option<String>,
    /// Email address of the client to alert
    #[arg(long, default_value = "")]
    pub email: String,
}

impl AccountArgs {
    fn date_created(&self) -> FieldValue {
        match &self.created {
            Some(text) => match NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d") {
                Ok(date) => FieldValue::Date(date),
                Err(_) => FieldValue::Text(text.clone()),
            },
            None => FieldValue::Missing,
        }
    }
}

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Open a chequing account
    Chequing {
        #[command(flatten)]
        common: AccountArgs,
        /// Overdraft limit
        #[arg(long, default_value = "-100", allow_hyphen_values = true)]
        limit: String,
        /// Overdraft rate (0.05 = 5%)
        #[arg(long, default_value = "0.05", allow_hyphen_values = true)]
        rate: String,
    },
    /// Open a savings account
    Savings {
        #[command(flatten)]
        common: AccountArgs,
        /// Minimum balance
        #[arg(long, default_value = "50", allow_hyphen_values = true)]
        minimum: String,
    },
    /// Open an investment account
    Investment {
        #[command(flatten)]
        common: AccountArgs,
        /// Management fee
        #[arg(long, default_value = "2.55", allow_hyphen_values = true)]
        fee: String,
    },
}

/// Handle an account command
pub fn handle_account_command(settings: &Settings, cmd: AccountCommands) -> BankResult<()> {
    let (common, mut account) = open_account(cmd)?;

    let client = match (&common.first_name, &common.last_name) {
        (Some(first), Some(last)) => {
            let client = Rc::new(Client::with_mailer(
                common.client,
                first,
                last,
                &common.email,
                Rc::new(LogMailer::echoing(settings.echo_alerts)),
            )?);
            account.attach(client.clone());
            Some(client)
        }
        _ => None,
    };

    for txn in &common.transactions {
        debug!(kind = %txn.kind, amount = %txn.amount, "Applying transaction");

        let result = match txn.kind {
            TransactionKind::Deposit => account.deposit(txn.amount.as_str()),
            TransactionKind::Withdrawal => account.withdraw(txn.amount.as_str()),
        };

        if let Err(e) = result {
            println!("{}", format_transaction_error(&e));
        }
    }

    println!("{}", format_account_report(&account, client.as_deref()));

    Ok(())
}

fn open_account(cmd: AccountCommands) -> BankResult<(AccountArgs, AnyAccount)> {
    match cmd {
        AccountCommands::Chequing {
            common,
            limit,
            rate,
        } => {
            let account = ChequingAccount::new(
                common.account,
                common.client,
                common.balance.as_str(),
                common.date_created(),
                limit,
                rate,
            )?;
            Ok((common, account.into()))
        }
        AccountCommands::Savings { common, minimum } => {
            let account = SavingsAccount::new(
                common.account,
                common.client,
                common.balance.as_str(),
                common.date_created(),
                minimum,
            )?;
            Ok((common, account.into()))
        }
        AccountCommands::Investment { common, fee } => {
            let account = InvestmentAccount::new(
                common.account,
                common.client,
                common.balance.as_str(),
                common.date_created(),
                fee,
            )?;
            Ok((common, account.into()))
        }
    }
}
