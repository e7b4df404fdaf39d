//! spf-render - replay a saved backend response through the page view

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spf_cli::Cli;

fn main() -> Result<()> {
    // Initialize logging (stderr, so rendered output stays clean on stdout)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rendered = spf_cli::render::run(&cli)?;
    print!("{rendered}");
    Ok(())
}
