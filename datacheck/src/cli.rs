// datacheck/src/cli.rs
//
// Single source of truth for the CLI definition (Clap struct).

use clap::Parser;
use std::path::PathBuf;

use datacheck_core::infrastructure::config::RunConfig;

/// Every flag is optional: without arguments the run reads
/// `customers-100000.csv` and writes `validation_report.pdf`.
#[derive(Parser, Debug)]
#[command(name = "datacheck")]
#[command(about = "Validates the customer CSV, renders a PDF report and mails it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV file to validate
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Where the PDF report is written
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also dump the run result as JSON to this path
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Directory searched for datacheck.yaml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

impl Cli {
    /// CLI flags are the last configuration layer.
    pub fn apply(&self, mut config: RunConfig) -> RunConfig {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.report_path = output.clone();
        }
        if let Some(results) = &self.results {
            config.results_path = Some(results.clone());
        }
        config
    }
}
