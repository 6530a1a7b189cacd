// datacheck-core/src/infrastructure/adapters/smtp.rs

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::Code;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, instrument};

use crate::infrastructure::config::mail::SmtpEndpoint;
use crate::ports::mailer::{DeliveryError, Mailer, OutgoingMail, SmtpLogin};

/// SMTP reply codes meaning the login was refused.
const AUTH_FAILURE_CODES: [&str; 3] = ["530", "534", "535"];

/// Submits mail over STARTTLS with `lettre`.
///
/// The transport is built per delivery without pooling, so the connection
/// is opened, used for one message and closed again whatever the result.
pub struct SmtpMailer {
    endpoint: SmtpEndpoint,
}

impl SmtpMailer {
    pub fn new(endpoint: SmtpEndpoint) -> Self {
        Self { endpoint }
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|e: lettre::address::AddressError| {
        DeliveryError::Address {
            address: address.to_string(),
            reason: e.to_string(),
        }
    })
}

pub fn build_message(mail: OutgoingMail) -> Result<Message, DeliveryError> {
    let content_type = ContentType::parse(&mail.attachment.content_type)
        .map_err(|e| DeliveryError::Message(e.to_string()))?;
    let attachment =
        Attachment::new(mail.attachment.filename).body(mail.attachment.content, content_type);

    Message::builder()
        .from(parse_mailbox(&mail.from)?)
        .to(parse_mailbox(&mail.to)?)
        .subject(mail.subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(mail.body))
                .singlepart(attachment),
        )
        .map_err(|e| DeliveryError::Message(e.to_string()))
}

fn classify(err: lettre::transport::smtp::Error) -> DeliveryError {
    classify_code(err.status(), err.to_string())
}

fn classify_code(code: Option<Code>, message: String) -> DeliveryError {
    match code {
        Some(c) if AUTH_FAILURE_CODES.contains(&c.to_string().as_str()) => {
            DeliveryError::Authentication(message)
        }
        _ => DeliveryError::Transport(message),
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[instrument(skip(self, login, mail), fields(host = %self.endpoint.host, port = self.endpoint.port))]
    async fn deliver(&self, login: &SmtpLogin, mail: OutgoingMail) -> Result<(), DeliveryError> {
        let recipient = mail.to.clone();
        let message = build_message(mail)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.endpoint.host)
            .map_err(classify)?
            .port(self.endpoint.port)
            .credentials(Credentials::new(
                login.username.clone(),
                login.password.clone(),
            ))
            .build();

        transport.send(message).await.map_err(classify)?;

        info!(to = %recipient, "Report email submitted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::mailer::MailAttachment;
    use lettre::transport::smtp::response::{Category, Detail, Severity};

    fn mail(to: &str) -> OutgoingMail {
        OutgoingMail {
            from: "reports@example.com".into(),
            to: to.into(),
            subject: "Validation report".into(),
            body: "See attached.\n".into(),
            attachment: MailAttachment {
                filename: "customer_report.pdf".into(),
                content_type: "application/pdf".into(),
                content: b"%PDF-1.3".to_vec(),
            },
        }
    }

    #[test]
    fn test_build_message_attaches_report() {
        let message = build_message(mail("ops@example.com")).unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(raw.contains("Subject: Validation report"));
        assert!(raw.contains("customer_report.pdf"));
        assert!(raw.contains("application/pdf"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let err = build_message(mail("not-an-email")).unwrap_err();
        assert!(matches!(err, DeliveryError::Address { address, .. } if address == "not-an-email"));
    }

    #[test]
    fn test_rejected_login_codes_are_authentication() {
        for detail in [Detail::Zero, Detail::Four, Detail::Five] {
            let code = Code::new(
                Severity::PermanentNegativeCompletion,
                Category::Unspecified3,
                detail,
            );
            let err = classify_code(Some(code), format!("{code} rejected"));
            assert!(matches!(err, DeliveryError::Authentication(_)), "{code}");
        }
    }

    #[test]
    fn test_other_failures_are_transport() {
        let mailbox_unavailable = Code::new(
            Severity::PermanentNegativeCompletion,
            Category::MailSystem,
            Detail::Zero,
        );
        assert!(matches!(
            classify_code(Some(mailbox_unavailable), "550".into()),
            DeliveryError::Transport(_)
        ));
        assert!(matches!(
            classify_code(None, "connection refused".into()),
            DeliveryError::Transport(_)
        ));
    }
}
