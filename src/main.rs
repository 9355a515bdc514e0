use std::path::PathBuf;

use anyhow::{Context, Result};
use chacha_fixtures::{FixtureParams, FixtureSet};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "chacha-fixtures")]
#[command(about = "Generate ChaCha20 golden fixtures for a hardware testbench", long_about = None)]
struct Args {
    /// Number of 512-bit blocks the core processes per cycle
    blocks_per_cycle: usize,

    /// Hardware data bus width in bits
    bus_width: usize,

    /// Number of per-cycle chunks stacked into the plaintext
    big_blocks: usize,

    /// Directory the word files are written to
    #[arg(short, long, default_value = "test_files")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let params = FixtureParams::new(args.blocks_per_cycle, args.bus_width, args.big_blocks);

    params.validate().context("invalid run parameters")?;

    let fixtures = FixtureSet::generate(&params).context("failed to generate fixtures")?;

    fixtures
        .write_to(&args.out_dir)
        .with_context(|| format!("failed to write fixtures to {}", args.out_dir.display()))?;

    print!("{}", fixtures.report(&params));

    info!(out_dir = %args.out_dir.display(), "done");
    Ok(())
}
