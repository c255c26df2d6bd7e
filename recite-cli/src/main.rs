//! recite-check - compare a recited transcript against its reference text
//!
//! ```text
//! recite-check passage.txt transcript.txt --tail-tolerant --sentences
//! echo "学而时习之" | recite-check passage.txt - --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use recite_cli::cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = run(&cli)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
