//! Shared flag blocks and connection glue for the seeding binaries.

use clap::{Args, ValueEnum};

use customer_activity::credentials::{
    HttpTokenService, StaticTokenProvider, TokenProvider, TokenScope,
};
use customer_activity::database::{MySqlActivitySink, SinkConfig};

use crate::config::FailurePolicy;

/// Connection and credential flags shared by `setup` and `replay`.
#[derive(Debug, Args)]
pub struct ConnectArgs {
    /// Database endpoint host name.
    #[arg(short, long)]
    pub endpoint: String,

    /// Database port.
    #[arg(long, default_value_t = 3306)]
    pub port: u16,

    /// Authenticating principal.
    #[arg(short, long)]
    pub user: String,

    /// Database name.
    #[arg(short, long, default_value = "workshopdb")]
    pub database: String,

    /// Region the credential is scoped to.
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// Base URL of the token service issuing short-lived credentials.
    #[arg(long, conflicts_with = "password")]
    pub token_service: Option<String>,

    /// Fixed password instead of a token service (local development).
    #[arg(long)]
    pub password: Option<String>,

    /// Do not use the cleartext auth plugin on the connection.
    #[arg(long)]
    pub no_cleartext_auth: bool,

    /// Do not require SSL on the connection.
    #[arg(long)]
    pub no_ssl: bool,
}

impl ConnectArgs {
    pub fn scope(&self) -> TokenScope {
        TokenScope {
            endpoint: self.endpoint.clone(),
            port: self.port,
            username: self.user.clone(),
            region: self.region.clone(),
        }
    }

    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            endpoint: self.endpoint.clone(),
            port: self.port,
            username: self.user.clone(),
            database: self.database.clone(),
            cleartext_auth: !self.no_cleartext_auth,
            require_ssl: !self.no_ssl,
            max_connections: 1,
        }
    }

    pub fn token_provider(&self) -> anyhow::Result<Box<dyn TokenProvider>> {
        match (&self.token_service, &self.password) {
            (Some(url), _) => Ok(Box::new(HttpTokenService::new(url.clone()))),
            (None, Some(password)) => Ok(Box::new(StaticTokenProvider::new(password.clone()))),
            (None, None) => anyhow::bail!("either --token-service or --password is required"),
        }
    }

    /// Issues a credential and opens the sink connection.
    pub async fn connect(&self) -> anyhow::Result<MySqlActivitySink> {
        let provider = self.token_provider()?;
        let token = provider.issue(&self.scope()).await?;
        tracing::info!("credential issued, expires at {}", token.expires_at());

        let sink = MySqlActivitySink::connect(&self.sink_config(), &token).await?;
        tracing::info!("connected to {}:{}", self.endpoint, self.port);
        Ok(sink)
    }
}

/// Per-record failure handling, as a flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnError {
    Abort,
    Skip,
    Retry,
}

impl std::fmt::Display for OnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OnError::Abort => "abort",
            OnError::Skip => "skip",
            OnError::Retry => "retry",
        })
    }
}

impl OnError {
    pub fn into_policy(self, attempts: u32) -> FailurePolicy {
        match self {
            OnError::Abort => FailurePolicy::Abort,
            OnError::Skip => FailurePolicy::Skip,
            OnError::Retry => FailurePolicy::Retry { attempts },
        }
    }
}
