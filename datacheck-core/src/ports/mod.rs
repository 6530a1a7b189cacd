// datacheck-core/src/ports/mod.rs
//
// Contracts the use cases need from the outside world, without knowing how
// they are fulfilled (PDF library, SMTP relay, in-memory test double...).

pub mod document;
pub mod mailer;

pub use document::DocumentWriter;
pub use mailer::{DeliveryError, MailAttachment, Mailer, OutgoingMail, SmtpLogin};
