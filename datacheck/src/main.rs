// datacheck/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug datacheck ... pour voir les détails
    tracing_subscriber::fmt::init();

    // 2. .env next to the binary (EMAIL_ADDRESS, EMAIL_PASSWORD, RECIPIENT_EMAIL)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match commands::run::execute(&cli).await? {
        Ok(_) => Ok(()),
        Err(e) => {
            // Validation and rendering failures stop the run; delivery failures never get here
            eprintln!("\n💥 CRITICAL PIPELINE ERROR");
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
