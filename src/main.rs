//! Article-Scout main entry point
//!
//! This is the command-line interface for the Article-Scout one-hop article
//! link detector.

use anyhow::Context;
use article_scout::config::{load_config, Config};
use article_scout::console::{
    confirm_display, print_menu, print_progress, select_seed, StdinPrompter,
};
use article_scout::crawler::{build_http_client, Pipeline};
use article_scout::output::{format_table, write_csv};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Article-Scout: a one-hop article link detector
///
/// Article-Scout fetches a seed page, follows its outbound links one hop,
/// estimates each linked page's main-content size, and saves the links that
/// look like articles to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "article-scout")]
#[command(version = "1.0.0")]
#[command(about = "A one-hop article link detector", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file; defaults apply otherwise
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the output CSV path
    #[arg(short, long, value_name = "CSV")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the documented defaults
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).context("failed to load configuration")?
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output_path = output.display().to_string();
    }

    let client = build_http_client().context("failed to build HTTP client")?;
    let mut prompter = StdinPrompter;

    // Seed selection: menu plus free-form URL entry, retried until a page
    // is actually fetchable
    print_menu(&config);
    let (seed_url, seed_body) = select_seed(&mut prompter, &client, &config).await?;
    tracing::info!("Seed selected: {}", seed_url);

    // One-hop crawl over the seed's links
    let output_path = config.output_path.clone();
    let pipeline = Pipeline::new(client, config);
    let table = pipeline
        .run(&seed_url, &seed_body, &mut print_progress)
        .await;

    // Persist; an unwritable output path is fatal
    write_csv(&table, Path::new(&output_path))?;
    println!();
    println!(
        "SAVED: The article links have been saved to the {} file in this directory",
        output_path
    );

    // Optional console display
    if confirm_display(&mut prompter)? {
        print!("{}", format_table(&table));
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("article_scout=warn"),
            1 => EnvFilter::new("article_scout=info,warn"),
            2 => EnvFilter::new("article_scout=debug,info"),
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
