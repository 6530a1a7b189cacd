// datacheck-core/src/application/pipeline.rs

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::application::notification::{NotifyError, notify};
use crate::application::report::render;
use crate::application::validation::Validator;
use crate::domain::quality::RuleOutcome;
use crate::error::DatacheckError;
use crate::infrastructure::config::{MailCredentials, RunConfig};
use crate::ports::{DocumentWriter, Mailer};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent { recipient: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub suite: String,
    /// True when every rule passed.
    pub success: bool,
    pub outcomes: Vec<RuleOutcome>,
    pub report_path: PathBuf,
    pub delivery: DeliveryStatus,
}

// Context struct to keep run_pipeline's signature short
pub struct PipelineContext<'a> {
    pub validator: &'a Validator,
    pub writer: &'a dyn DocumentWriter,
    pub mailer: &'a dyn Mailer,
    pub credentials: &'a MailCredentials,
}

/// Validate -> Render -> Notify.
///
/// Validation and rendering errors abort the run. A notification failure is
/// logged and reported in [`RunResult::delivery`]; the report already on disk
/// stays valid and the run still completes.
pub async fn run_pipeline(
    ctx: PipelineContext<'_>,
    config: &RunConfig,
) -> Result<RunResult, DatacheckError> {
    println!("🔎 Validating {}", config.input_path.display());
    let outcomes = ctx.validator.validate(&config.input_path)?;

    println!("📄 Rendering report to {}", config.report_path.display());
    render(&outcomes, &config.report_path, ctx.writer)?;

    println!("✉️  Sending report...");
    let delivery = match notify(&config.report_path, ctx.credentials, ctx.mailer).await {
        Ok(()) => {
            let recipient = ctx.credentials.recipient.clone().unwrap_or_default();
            println!("   Email sent successfully to recipient.");
            DeliveryStatus::Sent { recipient }
        }
        Err(e) => {
            report_delivery_failure(&e);
            DeliveryStatus::Failed {
                reason: e.to_string(),
            }
        }
    };

    let result = RunResult {
        suite: ctx.validator.suite().name.clone(),
        success: outcomes.iter().all(|o| o.success),
        outcomes,
        report_path: config.report_path.clone(),
        delivery,
    };

    if let Some(path) = &config.results_path {
        save_json(path, &result)?;
        info!(path = ?path, "Run result saved");
    }

    Ok(result)
}

fn report_delivery_failure(err: &NotifyError) {
    error!(error = %err, "Report delivery failed");
    println!("   {}", err.user_message());
}

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), DatacheckError> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| DatacheckError::InternalError(format!("Serialization: {}", e)))?;
    crate::infrastructure::fs::atomic_write(path, content)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::notification::tests::{MockMailer, full_credentials};
    use crate::domain::quality::ExpectationSuite;
    use crate::infrastructure::adapters::PdfWriter;
    use crate::infrastructure::error::InfrastructureError;
    use crate::ports::mailer::DeliveryError;
    use anyhow::Result;
    use std::fmt::Write as _;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn customers_csv(dir: &TempDir, rows: usize) -> PathBuf {
        let mut out = String::from("Index,Customer Id,First Name,Last Name,Subscription Date\n");
        for i in 0..rows {
            writeln!(out, "{i},ID{i:0>6},Ann{i},Lee{i},2022-01-{:02}", i % 28 + 1).unwrap();
        }
        let path = dir.path().join("customers.csv");
        fs::write(&path, out).unwrap();
        path
    }

    fn config(dir: &TempDir, input: PathBuf) -> RunConfig {
        RunConfig {
            input_path: input,
            report_path: dir.path().join("validation_report.pdf"),
            results_path: Some(dir.path().join("results.json")),
        }
    }

    #[tokio::test]
    async fn test_clean_run_sends_exactly_one_mail() -> Result<()> {
        let dir = tempdir()?;
        let cfg = config(&dir, customers_csv(&dir, 100));
        let validator = Validator::new(ExpectationSuite::customer());
        let mailer = MockMailer::default();
        let credentials = full_credentials();

        let ctx = PipelineContext {
            validator: &validator,
            writer: &PdfWriter::default(),
            mailer: &mailer,
            credentials: &credentials,
        };
        let result = run_pipeline(ctx, &cfg).await?;

        assert!(result.success);
        assert_eq!(result.outcomes.len(), 6);
        assert!(result.outcomes.iter().all(|o| o.unexpected_count == 0));
        assert_eq!(mailer.attempts(), 1);
        assert_eq!(
            result.delivery,
            DeliveryStatus::Sent {
                recipient: "owner@example.com".into()
            }
        );
        assert!(cfg.report_path.exists());

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("results.json"))?)?;
        assert_eq!(saved["suite"], "customer_suite");
        assert_eq!(saved["delivery"]["status"], "sent");
        Ok(())
    }

    #[tokio::test]
    async fn test_delivery_failure_is_not_fatal() -> Result<()> {
        let dir = tempdir()?;
        let cfg = config(&dir, customers_csv(&dir, 5));
        let validator = Validator::new(ExpectationSuite::customer());
        let mailer = MockMailer::failing(DeliveryError::Authentication("535".into()));
        let credentials = full_credentials();

        let ctx = PipelineContext {
            validator: &validator,
            writer: &PdfWriter::default(),
            mailer: &mailer,
            credentials: &credentials,
        };
        let result = run_pipeline(ctx, &cfg).await?;

        assert!(matches!(result.delivery, DeliveryStatus::Failed { .. }));
        assert!(cfg.report_path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_input_aborts_before_render_and_mail() -> Result<()> {
        let dir = tempdir()?;
        let cfg = config(&dir, dir.path().join("absent.csv"));
        let validator = Validator::new(ExpectationSuite::customer());
        let mailer = MockMailer::default();
        let credentials = full_credentials();

        let ctx = PipelineContext {
            validator: &validator,
            writer: &PdfWriter::default(),
            mailer: &mailer,
            credentials: &credentials,
        };
        let err = run_pipeline(ctx, &cfg).await.unwrap_err();

        assert!(matches!(
            err,
            DatacheckError::Infrastructure(InfrastructureError::DatasetLoad { .. })
        ));
        assert!(!cfg.report_path.exists());
        assert_eq!(mailer.attempts(), 0);
        Ok(())
    }
}
