//! Matcha main entry point
//!
//! Command-line interface for the matcha terminal browser.

use clap::Parser;
use matcha::browser::Session;
use matcha::config::load_config_or_default;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Matcha: a green-on-black terminal browser
///
/// Enter a URL to read it as plain text, or anything else to search.
/// Search results are paginated ten rows at a time.
#[derive(Parser, Debug)]
#[command(name = "matcha")]
#[command(version = "1.0.0")]
#[command(about = "A green-on-black terminal browser", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

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

    let config = load_config_or_default(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        tracing::info!("Loaded configuration from: {}", path.display());
    }

    let mut session = Session::new(config)?;
    session.run().await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("matcha=warn"),
            1 => EnvFilter::new("matcha=info,warn"),
            2 => EnvFilter::new("matcha=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
