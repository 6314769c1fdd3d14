//! Email Harvest CLI
//!
//! Finds email addresses likely published on one website, or on every
//! website listed in the first column of a CSV file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use email_harvest::render::{write_report, RenderOptions};
use email_harvest::{HarvestConfig, HarvestError, Harvester, OpenAIExtractor, ResultMap};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "email-harvest", version, about)]
struct Cli {
    #[command(subcommand)]
    source: Source,

    /// Print results as JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    /// Print an outreach mailto: link for every address
    #[arg(long, global = true)]
    contact_links: bool,
}

#[derive(Subcommand)]
enum Source {
    /// Harvest a single website
    Url { url: String },

    /// Harvest every http(s) URL in the first column of a CSV file
    Csv { path: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,email_harvest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let results = match harvest(cli).await {
        Ok(results) => results,
        Err(HarvestError::Configuration(e)) => {
            return Err(anyhow::Error::new(e).context("extraction service is not configured"))
        }
        Err(HarvestError::Input(e)) => return Err(e.into()),
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&results).context("serializing results")?;
        println!("{}", json);
    } else {
        let options = RenderOptions {
            contact_links: cli.contact_links,
        };
        let mut report = String::new();
        write_report(&mut report, &results, options).context("rendering report")?;
        print!("{}", report);
    }

    Ok(())
}

async fn harvest(cli: &Cli) -> email_harvest::Result<ResultMap> {
    let config = HarvestConfig::from_env()?;
    tracing::info!(
        model = %config.model,
        base_url = %config.credentials.base_url,
        "loaded configuration"
    );

    let harvester = Harvester::new(OpenAIExtractor::from_config(&config));

    let results = match &cli.source {
        Source::Url { url } => harvester.harvest_url(url).await?,
        Source::Csv { path } => harvester.harvest_csv_file(path).await?,
    };
    Ok(results)
}
