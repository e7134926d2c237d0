//! org-authority - operator CLI for the authority engine
//!
//! # Configuration
//!
//! Configuration is read from `--config FILE` (YAML) when given, otherwise
//! from `ORG_AUTHORITY_*` environment variables. A `.env` file in the working
//! directory is loaded first.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, run};
use org_authority::Config;
use org_authority::utils::logging::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env().context("loading configuration from environment")?,
    };

    init_logging(config.logging())?;
    run(args.command, &config).await
}
