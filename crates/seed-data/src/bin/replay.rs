//! Drains the account pool into paced activity inserts.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin replay -- -e db.example.internal -u admin \
//!     --token-service https://tokens.example.internal --limit 1000
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use seed_data::artifact;
use seed_data::cli::{ConnectArgs, OnError};
use seed_data::config::ReplayConfig;
use seed_data::generators::ActivityGenerator;
use seed_data::replay::Replayer;

#[derive(Parser)]
#[command(name = "replay")]
#[command(about = "Replay the account pool as paced activity inserts", version)]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Account pool artifact to drain.
    #[arg(short, long, default_value = "account_ids.txt")]
    artifact: PathBuf,

    /// Maximum number of accounts to process, as a prefix of the artifact.
    #[arg(short, long, default_value_t = 1000)]
    limit: usize,

    /// Minimum delay between submissions, in seconds.
    #[arg(long, default_value_t = 5)]
    pace_secs: u64,

    /// What to do when a single submission fails.
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    on_error: OnError,

    /// Extra attempts per record under `--on-error retry`.
    #[arg(long, default_value_t = 2)]
    retry_attempts: u32,

    /// Seed for reproducible record synthesis.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let pool = artifact::read_pool(&cli.artifact)?;
    tracing::info!(
        "loaded {} account ids from {}",
        pool.len(),
        cli.artifact.display()
    );

    let sink = cli.connect.connect().await?;

    let config = ReplayConfig {
        limit: cli.limit,
        pace: Duration::from_secs(cli.pace_secs),
        on_error: cli.on_error.into_policy(cli.retry_attempts),
    };
    let replayer = Replayer::new(sink, ActivityGenerator::new(), config);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = replayer.replay(&pool, &mut rng).await?;

    tracing::info!(
        "replay complete: {} submitted, {} skipped",
        report.submitted,
        report.skipped
    );
    Ok(())
}
