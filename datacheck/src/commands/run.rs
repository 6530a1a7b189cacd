// datacheck/src/commands/run.rs
//
// USE CASE: Validate -> Render -> Notify.

use anyhow::Context;
use tracing::info;

use datacheck_core::DatacheckError;
use datacheck_core::application::{
    PipelineContext, RunResult, Validator, run_pipeline,
};
use datacheck_core::domain::quality::ExpectationSuite;
use datacheck_core::infrastructure::adapters::{PdfWriter, SmtpMailer};
use datacheck_core::infrastructure::config::{MailCredentials, SmtpEndpoint, load_run_config};

use crate::cli::Cli;
use crate::commands::summary::outcome_table;

/// `Ok(Err(_))` is a fatal pipeline error, kept apart from setup failures
/// so `main` can render it as a diagnostic.
pub async fn execute(cli: &Cli) -> anyhow::Result<Result<RunResult, DatacheckError>> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_run_config(&cli.config_dir).with_context(|| {
        format!("Failed to load configuration from {:?}", cli.config_dir)
    })?;
    let config = cli.apply(config);
    info!(input = ?config.input_path, report = ?config.report_path, "Run configuration resolved");

    // B. Adapters
    let credentials = MailCredentials::from_env();
    let validator = Validator::new(ExpectationSuite::customer());
    let writer = PdfWriter::default();
    let mailer = SmtpMailer::new(SmtpEndpoint::default());

    // C. Run the Pipeline (Application Layer)
    let ctx = PipelineContext {
        validator: &validator,
        writer: &writer,
        mailer: &mailer,
        credentials: &credentials,
    };
    let result = run_pipeline(ctx, &config).await;

    if let Ok(run) = &result {
        println!("\n{}", outcome_table(&run.outcomes));
        let failed = run.outcomes.iter().filter(|o| !o.success).count();
        if failed == 0 {
            println!("✨ All {} checks passed in {:.2?}", run.outcomes.len(), start.elapsed());
        } else {
            println!("⚠️  {} of {} checks failed.", failed, run.outcomes.len());
        }
        println!("📄 Report: {}", run.report_path.display());
    }

    Ok(result)
}
