use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use udesigner::cli::{self, Cli};

fn main() -> Result<()> {
    // Logs go to stderr so generated text on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run(Cli::parse())
}
