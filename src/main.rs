//! Gazette main entry point
//!
//! This is the command-line presentation shell around the crawl pipeline:
//! it takes one seed listing URL plus normalization flags, runs the crawl,
//! and writes the resulting document collection as JSON.

use anyhow::Context;
use clap::Parser;
use gazette::config::{load_config, Config};
use gazette::document::DocumentCollection;
use gazette::normalize::NormalizeOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Gazette: an asynchronous news listing scraper and preprocessor
///
/// Gazette fetches a listing page, discovers its article entries, fetches
/// every article body concurrently, strips template noise, and optionally
/// normalizes the extracted text.
#[derive(Parser, Debug)]
#[command(name = "gazette")]
#[command(version = "1.0.0")]
#[command(about = "Scrape a news listing page into a JSON document collection", long_about = None)]
struct Cli {
    /// Seed listing page URL
    #[arg(value_name = "URL")]
    seed_url: String,

    /// Path to optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Lowercase extracted content
    #[arg(long)]
    lowercase: bool,

    /// Strip characters that are not lowercase letters or whitespace
    #[arg(long)]
    strip_special: bool,

    /// Remove stopwords from extracted content
    #[arg(long)]
    strip_stopwords: bool,

    /// Where to write the JSON output ("-" for stdout)
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    out: String,

    /// Also write the collection before normalization to this path
    #[arg(long, value_name = "PATH")]
    raw_out: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::default(),
    };

    let mut collection = gazette::crawl(&cli.seed_url, &config).await?;

    if collection.is_empty() {
        tracing::warn!("No articles found. Check the URL or the structure of the page.");
    } else {
        tracing::info!("Scraped {} articles", collection.len());
    }

    if let Some(raw_path) = &cli.raw_out {
        let json = collection.to_json_pretty()?;
        std::fs::write(raw_path, json)
            .with_context(|| format!("writing {}", raw_path.display()))?;
        tracing::info!("Raw collection written to {}", raw_path.display());
    }

    let options = NormalizeOptions {
        lowercase: cli.lowercase,
        strip_special: cli.strip_special,
        strip_stopwords: cli.strip_stopwords,
    };
    if !options.is_noop() {
        collection.normalize_contents(&options);
        tracing::info!("Normalization applied: {:?}", options);
    }

    write_output(&collection, &cli.out)?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gazette=info,warn"),
            1 => EnvFilter::new("gazette=debug,info"),
            2 => EnvFilter::new("gazette=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Writes the collection to the chosen destination ("-" means stdout)
fn write_output(collection: &DocumentCollection, out: &str) -> anyhow::Result<()> {
    let json = collection.to_json_pretty()?;

    if out == "-" {
        println!("{}", json);
    } else {
        std::fs::write(out, json).with_context(|| format!("writing {}", out))?;
        tracing::info!("Collection written to {}", out);
    }

    Ok(())
}
