//! Entry point: load configuration, run the fetch, map the outcome to an exit code.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use football_data_fetcher::{cli::FetchArgs, FetchConfig, Fetcher};
use log::{error, info, warn, LevelFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let args = FetchArgs::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args).await {
        Ok(true) => {
            info!("✓ Success");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            warn!("⚠ Partial success or error");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: FetchArgs) -> anyhow::Result<bool> {
    dotenv::dotenv().ok();

    let config = FetchConfig::from_args(args)?;
    let output = config.output.clone();

    let mut fetcher = Fetcher::new(&config).context("Failed to build HTTP client")?;
    let tally = fetcher
        .run(&output)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(tally.is_success())
}
