mod platform;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use platform::logging::{self, LogDestination};

/// Today I Learned: browse, share and vote on short facts.
#[derive(Parser, Debug)]
struct Args {
    /// RON configuration file; missing file means defaults.
    #[arg(long, default_value = "feed.ron")]
    config: PathBuf,
    /// Use the in-memory store seeded with sample facts.
    #[arg(long)]
    memory: bool,
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::initialize(args.log);

    let mut config = platform::config::load(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    if args.memory {
        config.gateway = platform::config::GatewayMode::Memory;
    }

    platform::run_app(config)
}
