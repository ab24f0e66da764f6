//! serp-signals - Google result harvesting with brand and signal scoring
//!
//! Prints one batch of scored results for a keyword to stdout.

use anyhow::Result;
use clap::Parser;
use serp_signals::commands::AnalyzeCommand;
use serp_signals::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "serp-signals",
    version,
    about = "Brand-mention signals from Google search results",
    long_about = "Fetches Google results for a keyword, classifies each result by brand, and scores engagement and sentiment. Falls back to a built-in dataset when live results are unavailable."
)]
struct Cli {
    /// Search keyword
    #[arg(default_value = "smart fan")]
    keyword: String,

    /// Platforms to harvest (only "google" is recognized)
    #[arg(default_value = "google")]
    platforms: String,

    /// Number of results to harvest
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    num_results: Option<u32>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Print a share-of-voice summary instead of the raw results
    #[arg(long)]
    share_of_voice: bool,

    /// Brand highlighted in the share-of-voice summary
    #[arg(long)]
    focus_brand: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "SERP_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SERP_TIMEOUT")]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the batch
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(num_results) = cli.num_results {
        config.num_results = num_results as usize;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.share_of_voice {
        config.share_of_voice = true;
    }
    if let Some(brand) = cli.focus_brand {
        config.focus_brand = brand;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let cmd = AnalyzeCommand::new(config);
    let output = cmd.execute(&cli.keyword, &cli.platforms).await;
    println!("{}", output);

    Ok(())
}
