// datacheck-core/src/application/notification.rs

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

use crate::infrastructure::config::MailCredentials;
use crate::ports::mailer::{DeliveryError, MailAttachment, Mailer, OutgoingMail};

pub const MAIL_SUBJECT: &str = "Great Expectations Validation (sales and customers) report";
pub const MAIL_BODY: &str = "Please find attached the Great Expectations Validation Summary for sales and customers in PDF format.\n\n";
/// Name the report is attached under, whatever the file is called on disk.
pub const ATTACHMENT_NAME: &str = "customer_report.pdf";
pub const ATTACHMENT_CONTENT_TYPE: &str = "application/pdf";

#[derive(Error, Debug, Diagnostic)]
pub enum NotifyError {
    #[error("mail setting {0} is not set")]
    #[diagnostic(
        code(datacheck::notify::config),
        help("Set it in the environment or in a .env file next to the binary.")
    )]
    MissingCredential(&'static str),

    #[error("Error attaching PDF file '{}': {source}", path.display())]
    #[diagnostic(code(datacheck::notify::attachment))]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Delivery(#[from] DeliveryError),
}

impl NotifyError {
    /// Operator-facing explanation, one per failure kind.
    pub fn user_message(&self) -> String {
        match self {
            NotifyError::MissingCredential(var) => {
                format!("Mail settings incomplete: {var} is not set. Report not sent.")
            }
            NotifyError::Attachment { source, .. } => {
                format!("Error attaching PDF file: {source}")
            }
            NotifyError::Delivery(DeliveryError::Authentication(_)) => {
                "Failed to authenticate. Check your email and password.".to_string()
            }
            NotifyError::Delivery(e @ DeliveryError::Transport(_)) => {
                format!("SMTP error occurred: {e}")
            }
            NotifyError::Delivery(e) => format!("An unexpected error occurred: {e}"),
        }
    }
}

/// Mails the report at `attachment_path` to the configured recipient.
///
/// Credentials are checked and the attachment is read before the mailer is
/// touched; the mailer is called at most once.
#[instrument(skip_all, fields(path = %attachment_path.display()))]
pub async fn notify(
    attachment_path: &Path,
    credentials: &MailCredentials,
    mailer: &dyn Mailer,
) -> Result<(), NotifyError> {
    let resolved = credentials
        .resolve()
        .map_err(NotifyError::MissingCredential)?;

    let content = tokio::fs::read(attachment_path)
        .await
        .map_err(|source| NotifyError::Attachment {
            path: attachment_path.to_path_buf(),
            source,
        })?;
    info!(bytes = content.len(), "PDF attached successfully");

    let mail = OutgoingMail {
        from: resolved.sender,
        to: resolved.recipient.clone(),
        subject: MAIL_SUBJECT.to_string(),
        body: MAIL_BODY.to_string(),
        attachment: MailAttachment {
            filename: ATTACHMENT_NAME.to_string(),
            content_type: ATTACHMENT_CONTENT_TYPE.to_string(),
            content,
        },
    };

    mailer.deliver(&resolved.login, mail).await?;
    info!(to = %resolved.recipient, "Email sent successfully");
    Ok(())
}
