//! Creates the activity table and the replication user.
//!
//! The target database must already exist. Run with:
//! ```
//! cargo run -p seed-data --bin setup -- -e db.example.internal -u admin --password ...
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use customer_activity::schema;
use seed_data::cli::ConnectArgs;

#[derive(Parser)]
#[command(name = "setup")]
#[command(about = "Create the activity schema and replication user", version)]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Password for the replication user.
    #[arg(long, default_value = "repltr")]
    repl_password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!("setting up tables");
    let sink = cli.connect.connect().await?;
    schema::setup_schema(sink.pool(), &cli.repl_password).await?;
    tracing::info!("schema setup complete");

    Ok(())
}
