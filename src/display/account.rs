//! Account display formatting

use crate::error::BankError;
use crate::models::{BankAccount, Client, Dollars};

/// Format an account followed by its current service charge
pub fn format_account_report(account: &dyn BankAccount, client: Option<&Client>) -> String {
    let mut output = String::new();

    if let Some(client) = client {
        output.push_str(&format!("Client: {}\n", client));
    }

    output.push_str(&account.to_string());
    output.push('\n');
    output.push_str(&format!(
        "Service charges: {}",
        Dollars(account.get_service_charges())
    ));

    output
}

/// Format a rejected transaction for display
pub fn format_transaction_error(err: &BankError) -> String {
    format!("Error: {}", err)
}
