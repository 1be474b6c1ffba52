//! Generates the account pool artifact.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin generate -- --count 500000
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seed_data::artifact;
use seed_data::config::PoolConfig;
use seed_data::generators::AccountPoolGenerator;

#[derive(Parser)]
#[command(name = "generate")]
#[command(about = "Generate the synthetic account pool", version)]
struct Cli {
    /// Lower bound of the account-number range (inclusive).
    #[arg(long, default_value_t = 100_000)]
    range_low: i64,

    /// Upper bound of the account-number range (exclusive).
    #[arg(long, default_value_t = 1_000_000)]
    range_high: i64,

    /// Number of distinct accounts to draw.
    #[arg(long, default_value_t = 500_000)]
    count: usize,

    /// Seed for a reproducible pool.
    #[arg(long)]
    seed: Option<u64>,

    /// Artifact path; overwritten if present.
    #[arg(short, long, default_value = "account_ids.txt")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = PoolConfig {
        range_low: cli.range_low,
        range_high: cli.range_high,
        count: cli.count,
        seed: cli.seed,
    };

    tracing::info!("setting up accounts");
    let pool = AccountPoolGenerator::new(config).generate()?;
    artifact::write_pool(&cli.out, &pool)?;
    tracing::info!("wrote {} account ids to {}", pool.len(), cli.out.display());

    Ok(())
}
