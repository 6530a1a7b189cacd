// datacheck-core/src/infrastructure/config/mail.rs

use std::fmt;

use crate::ports::mailer::SmtpLogin;

pub const SMTP_HOST: &str = "smtp-mail.outlook.com";
pub const SMTP_PORT: u16 = 587;

pub const SENDER_VAR: &str = "EMAIL_ADDRESS";
pub const PASSWORD_VAR: &str = "EMAIL_PASSWORD";
pub const RECIPIENT_VAR: &str = "RECIPIENT_EMAIL";

/// Outbound mail submission endpoint (STARTTLS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpEndpoint {
    pub host: String,
    pub port: u16,
}

impl Default for SmtpEndpoint {
    fn default() -> Self {
        Self {
            host: SMTP_HOST.to_string(),
            port: SMTP_PORT,
        }
    }
}

/// Sender, secret and recipient as found at startup.
///
/// Nothing is checked here: a missing value only becomes an error when a
/// mail is actually sent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MailCredentials {
    pub sender: Option<String>,
    pub password: Option<String>,
    pub recipient: Option<String>,
}

/// Credentials with every required value present.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCredentials {
    pub login: SmtpLogin,
    pub sender: String,
    pub recipient: String,
}

impl MailCredentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds credentials from any key/value source (env, test map...).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            sender: get(SENDER_VAR),
            password: get(PASSWORD_VAR),
            recipient: get(RECIPIENT_VAR),
        }
    }

    /// Returns the name of the first missing variable on failure.
    pub fn resolve(&self) -> Result<ResolvedCredentials, &'static str> {
        let sender = self.sender.clone().ok_or(SENDER_VAR)?;
        let password = self.password.clone().ok_or(PASSWORD_VAR)?;
        let recipient = self.recipient.clone().ok_or(RECIPIENT_VAR)?;
        Ok(ResolvedCredentials {
            login: SmtpLogin {
                username: sender.clone(),
                password,
            },
            sender,
            recipient,
        })
    }
}

impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("sender", &self.sender)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("recipient", &self.recipient)
            .finish()
    }
}
