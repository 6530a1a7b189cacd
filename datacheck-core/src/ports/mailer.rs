// datacheck-core/src/ports/mailer.rs

use async_trait::async_trait;
use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Every way a single mail submission can fail.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum DeliveryError {
    #[error("authentication rejected by mail server: {0}")]
    #[diagnostic(
        code(datacheck::delivery::auth),
        help("Check EMAIL_ADDRESS and EMAIL_PASSWORD.")
    )]
    Authentication(String),

    #[error("invalid mail address '{address}': {reason}")]
    #[diagnostic(code(datacheck::delivery::address))]
    Address { address: String, reason: String },

    #[error("could not assemble message: {0}")]
    #[diagnostic(code(datacheck::delivery::message))]
    Message(String),

    #[error("SMTP error: {0}")]
    #[diagnostic(
        code(datacheck::delivery::transport),
        help("Check network access to the mail submission endpoint.")
    )]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailAttachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// A fully resolved message, independent of any mail library.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment: MailAttachment,
}

#[derive(Clone, PartialEq)]
pub struct SmtpLogin {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SmtpLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpLogin")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Submits one message. Called at most once per run; no retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, login: &SmtpLogin, mail: OutgoingMail) -> Result<(), DeliveryError>;
}
