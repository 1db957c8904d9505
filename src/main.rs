use book_crawl::{BookCrawl, Error, ScraperConfig, output};
use clap::Parser;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Crawl failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ScraperConfig) -> Result<(), Error> {
    let start_time = std::time::Instant::now();
    ::log::info!("Starting crawl of {}", config.start_url);

    let outcome = BookCrawl::from_config(config.clone()).run().await?;

    if !outcome.dropped.is_empty() {
        ::log::warn!(
            "{} of {} detail pages produced no record",
            outcome.dropped.len(),
            outcome.attempted()
        );
    }

    let paths = output::write_outputs(&outcome.records, &config)?;

    ::log::info!(
        "Crawl complete - {} books written to {} and {} in {:.2} seconds",
        outcome.records.len(),
        paths.csv.display(),
        paths.jsonl.display(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
