//! CLI tool for manually announcing content to search engines.
//!
//! The announce API is best-effort: a failed notification is only logged,
//! and retry is left to the next publish or a manual re-run. This tool is
//! that manual re-run path.
//!
//! # Usage
//!
//! ```bash
//! # Re-announce a published resource (item page + listing indexes)
//! cargo run --bin announce -- resource aba-data-collection-guide
//!
//! # Announce explicit URLs (absolute or site-relative)
//! cargo run --bin announce -- urls /resources /resources/categories
//!
//! # Show which notifiers are configured
//! cargo run --bin announce -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `SITE_BASE_URL`, `INDEXNOW_KEY`,
//! `GOOGLE_SERVICE_ACCOUNT_EMAIL`, `GOOGLE_PRIVATE_KEY`.
//! `ANNOUNCE_TOKEN` is not needed here.
//!
//! # Exit Status
//!
//! Always 0 when the command runs, even if notifications fail — failures
//! are printed per result, matching the best-effort contract of the API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use crawl_notify::application::services::AnnounceOutcome;
use crawl_notify::config::Config;
use crawl_notify::server::build_announce_service;

/// CLI tool for manual crawl notifications.
#[derive(Parser)]
#[command(name = "announce")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Announce a published resource and its listing pages
    Resource {
        /// Resource slug as used in its public URL
        slug: String,
    },

    /// Announce an explicit list of URLs (absolute or site-relative)
    Urls {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Show notifier configuration state
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    let service = build_announce_service(&config)?;

    match cli.command {
        Commands::Resource { slug } => {
            let outcome = service.announce_resource(&slug).await;
            print_outcome(&outcome);
        }
        Commands::Urls { urls } => {
            let outcome = service.announce_urls(urls).await;
            print_outcome(&outcome);
        }
        Commands::Check => {
            let names = service.notifier_names();
            if names.is_empty() {
                println!(
                    "{}",
                    "No notifiers configured (set SITE_BASE_URL plus INDEXNOW_KEY and/or the Google service account)"
                        .yellow()
                );
            } else {
                for name in names {
                    println!("{} {}", "configured:".green(), name);
                }
            }
        }
    }

    Ok(())
}

/// Prints one line per notification result, then a summary.
fn print_outcome(outcome: &AnnounceOutcome) {
    if outcome.results.is_empty() {
        println!("{}", "Nothing announced: no notifiers configured".yellow());
        return;
    }

    for result in &outcome.results {
        if result.success {
            println!(
                "{} [{}] {}",
                "ok".green().bold(),
                result.notifier,
                result.urls.join(", ")
            );
        } else {
            println!(
                "{} [{}] {} - {}",
                "failed".red().bold(),
                result.notifier,
                result.urls.join(", "),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    println!(
        "\n{} total, {} successful, {} failed",
        outcome.total(),
        outcome.successful().to_string().green(),
        outcome.failed().to_string().red()
    );
}
