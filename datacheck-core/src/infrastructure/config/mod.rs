pub mod mail;
pub mod run;

pub use mail::{MailCredentials, ResolvedCredentials, SmtpEndpoint};
pub use run::{RunConfig, load_run_config};
