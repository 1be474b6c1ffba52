//! MySQL-backed activity sink.

use async_trait::async_trait;
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlSslMode};

use crate::credentials::DbAuthToken;
use crate::errors::{StoreError, mysql_error_number};
use crate::models::ActivityRecord;

/// Unknown database.
const ER_BAD_DB: u16 = 1049;

/// Connection settings for the activity database.
///
/// Everything the connection needs is carried here explicitly; nothing is
/// read from process-wide environment state.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub endpoint: String,
    pub port: u16,
    pub username: String,
    pub database: String,
    /// Send the credential with the cleartext auth plugin. Managed-database
    /// token auth requires it; pair it with `require_ssl`.
    pub cleartext_auth: bool,
    pub require_ssl: bool,
    pub max_connections: u32,
}

impl SinkConfig {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            port: 3306,
            username: username.into(),
            database: database.into(),
            cleartext_auth: true,
            require_ssl: true,
            max_connections: 1,
        }
    }
}

/// Accepts one activity record at a time; each accepted record is fully
/// committed before the call returns.
#[async_trait]
pub trait ActivitySink: Send + Sync {
    async fn submit(&self, record: &ActivityRecord) -> Result<(), StoreError>;
}

/// Activity sink writing single-row inserts through sqlx.
pub struct MySqlActivitySink {
    pool: MySqlPool,
}

impl MySqlActivitySink {
    /// Connects with an issued credential as the password.
    pub async fn connect(config: &SinkConfig, token: &DbAuthToken) -> Result<Self, StoreError> {
        let mut options = MySqlConnectOptions::new()
            .host(&config.endpoint)
            .port(config.port)
            .username(&config.username)
            .password(token.secret())
            .database(&config.database);

        if config.cleartext_auth {
            options = options.enable_cleartext_plugin(true);
        }
        if config.require_ssl {
            options = options.ssl_mode(MySqlSslMode::Required);
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|err| {
                if mysql_error_number(&err) == Some(ER_BAD_DB) {
                    StoreError::MissingDatabase(config.database.clone())
                } else {
                    StoreError::Connection(err)
                }
            })?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl ActivitySink for MySqlActivitySink {
    async fn submit(&self, record: &ActivityRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO customeractivity
                (user_id, city, transaction_type, monetary_value, timeinapp, feature_used)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.account_id)
        .bind(record.city.code())
        .bind(record.transaction_type.code())
        .bind(record.monetary_value.to_string())
        .bind(record.time_in_app_secs)
        .bind(record.feature_used.code())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
