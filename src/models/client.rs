//! Client model
//!
//! A client observes the accounts they are attached to. Each alert is turned
//! into an email and handed to a [`Mailer`].

use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

use super::field::{today, whole_number, FieldValue};
use crate::error::{BankError, BankResult};
use crate::mail::{LogMailer, Mailer, OutboundEmail};
use crate::observer::Observer;

/// Address used when a client's email does not validate
pub const FALLBACK_EMAIL: &str = "email@pixell-river.com";

/// A bank client
pub struct Client {
    client_number: i64,
    first_name: String,
    last_name: String,
    email_address: String,
    mailer: Rc<dyn Mailer>,
}

impl Client {
    /// Create a client whose alerts go to the log
    ///
    /// Names are trimmed. An email address that does not validate is
    /// replaced with [`FALLBACK_EMAIL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the client number is not a whole number or either
    /// name is blank.
    pub fn new(
        client_number: impl Into<FieldValue>,
        first_name: &str,
        last_name: &str,
        email_address: &str,
    ) -> BankResult<Self> {
        Self::with_mailer(
            client_number,
            first_name,
            last_name,
            email_address,
            Rc::new(LogMailer::new()),
        )
    }

    /// Create a client whose alerts go through `mailer`
    ///
    /// # Errors
    ///
    /// Same as [`Client::new`].
    pub fn with_mailer(
        client_number: impl Into<FieldValue>,
        first_name: &str,
        last_name: &str,
        email_address: &str,
        mailer: Rc<dyn Mailer>,
    ) -> BankResult<Self> {
        let client_number = whole_number(&client_number.into())
            .ok_or(BankError::NotWholeNumber { field: "Client ID" })?;

        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(BankError::BlankName {
                field: "First name",
            });
        }

        let last_name = last_name.trim();
        if last_name.is_empty() {
            return Err(BankError::BlankName { field: "Last name" });
        }

        let email_address = normalize_email(email_address).unwrap_or_else(|| {
            debug!(client_number, input = email_address, "Substituting fallback email");
            FALLBACK_EMAIL.to_string()
        });

        Ok(Self {
            client_number,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email_address,
            mailer,
        })
    }

    /// Get the client number
    pub fn client_number(&self) -> i64 {
        self.client_number
    }

    /// Get the trimmed first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get the trimmed last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Get the normalized email address, or the fallback
    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// Build the alert email for a message
    pub fn compose_alert(&self, message: &str) -> OutboundEmail {
        OutboundEmail {
            to: self.email_address.clone(),
            subject: format!("ALERT: Unusual Activity: {}", today()),
            body: format!(
                "Notification {}: {} {}: {}",
                self.client_number, self.first_name, self.last_name, message
            ),
        }
    }
}

impl Observer for Client {
    fn update(&self, message: &str) {
        let email = self.compose_alert(message);

        // Delivery failures belong to the transport, not the account
        if let Err(e) = self.mailer.send(&email) {
            warn!(
                client_number = self.client_number,
                to = %email.to,
                error = %e,
                "Failed to send alert email"
            );
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} [{}] - {}",
            self.last_name, self.first_name, self.client_number, self.email_address
        )
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("client_number", &self.client_number)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .finish_non_exhaustive()
    }
}

/// Validate an email address and normalize it
///
/// The address is trimmed and its domain lower-cased. Returns `None` when
/// the address is not syntactically valid:
/// - exactly one `@` with non-empty local and domain parts
/// - a dotted domain with no empty labels
/// - letters, digits and `.-+_` in the local part; letters, digits, `.` and
///   `-` in the domain
/// - 3 to 255 characters overall
pub fn normalize_email(email: &str) -> Option<String> {
    let email = email.trim();

    if email.len() < 3 || email.len() > 255 {
        return None;
    }

    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }

    let valid_local_chars =
        |c: char| c.is_alphanumeric() || c == '.' || c == '-' || c == '+' || c == '_';
    let valid_domain_chars = |c: char| c.is_alphanumeric() || c == '.' || c == '-';

    if !local.chars().all(valid_local_chars) || !domain.chars().all(valid_domain_chars) {
        return None;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return None;
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return None;
    }

    Some(format!("{}@{}", local, domain.to_lowercase()))
}
