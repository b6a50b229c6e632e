//! Outbound email hand-off for client alerts
//!
//! Delivery itself belongs to an external collaborator. The core only
//! composes the message and hands it to a [`Mailer`].

use std::cell::RefCell;

use thiserror::Error;
use tracing::info;

/// A composed alert email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Failure reported by a mail transport
#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail transport error: {0}")]
    Transport(String),
}

/// Delivers composed emails
pub trait Mailer {
    /// Send one email
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the message.
    fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// Mailer that records emails as log events instead of sending them
///
/// With `echo` enabled the email is also printed to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer {
    echo: bool,
}

impl LogMailer {
    pub const fn new() -> Self {
        Self { echo: false }
    }

    pub const fn echoing(echo: bool) -> Self {
        Self { echo }
    }
}

impl Mailer for LogMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        info!(to = %email.to, subject = %email.subject, body = %email.body, "Alert email");

        if self.echo {
            println!("To: {}", email.to);
            println!("Subject: {}", email.subject);
            println!("{}", email.body);
            println!();
        }

        Ok(())
    }
}

/// Mailer that keeps every email in memory, in send order
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: RefCell<Vec<OutboundEmail>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything sent so far
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.borrow().is_empty()
    }
}

impl Mailer for MemoryMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent.borrow_mut().push(email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutboundEmail {
        OutboundEmail {
            to: "dylan@rrc.ca".into(),
            subject: "ALERT".into(),
            body: "body".into(),
        }
    }

    #[test]
    fn test_memory_mailer_records_in_order() {
        let mailer = MemoryMailer::new();
        assert!(mailer.is_empty());

        mailer.send(&email()).unwrap();
        let mut second = email();
        second.body = "second".into();
        mailer.send(&second).unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].body, "second");
    }

    #[test]
    fn test_log_mailer_never_fails() {
        assert!(LogMailer::new().send(&email()).is_ok());
    }

    #[test]
    fn test_mail_error_display() {
        let err = MailError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Mail transport error: connection refused");
    }
}
