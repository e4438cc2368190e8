mod inspect;
mod scrape;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "coscout-cli")]
#[command(about = "Scrape company records from a business directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the company behind each search-results page URL
    Scrape {
        /// Search-results page URLs
        #[arg(required = true)]
        links: Vec<String>,

        /// Maximum scrapes in flight (defaults to `COSCOUT_MAX_CONCURRENT_SCRAPES`)
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Extract a company record from a saved detail page
    Extract {
        /// Path to the detail page HTML
        file: PathBuf,
    },
    /// Print the detail-page URL found on a saved search-results page
    Locate {
        /// Path to the results page HTML
        file: PathBuf,

        /// URL the page was fetched from, used to resolve relative links
        #[arg(long)]
        base: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = coscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scrape { links, concurrency } => {
            scrape::run_scrape(&config, links, concurrency).await
        }
        Commands::Extract { file } => inspect::run_extract(&file),
        Commands::Locate { file, base } => inspect::run_locate(&file, &base),
    }
}

#[cfg(test)]
mod tests;
