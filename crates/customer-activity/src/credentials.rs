//! Short-lived database credentials.
//!
//! Connections to the managed database authenticate with tokens scoped to
//! one endpoint, port, principal, and region. The issuing service stays an
//! opaque collaborator behind [`TokenProvider`]; a fixed-password provider
//! covers local development and tests.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};

/// Scope of a credential request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenScope {
    pub endpoint: String,
    pub port: u16,
    pub username: String,
    pub region: String,
}

/// A short-lived credential used once as a connection password.
///
/// Never persisted; Debug output redacts the secret.
#[derive(Clone)]
pub struct DbAuthToken {
    secret: String,
    expires_at: OffsetDateTime,
}

impl DbAuthToken {
    pub fn new(secret: String, ttl: Duration) -> Self {
        Self {
            secret,
            expires_at: OffsetDateTime::now_utc() + ttl,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_at(&self) -> OffsetDateTime {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        OffsetDateTime::now_utc() >= self.expires_at
    }
}

impl fmt::Debug for DbAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbAuthToken")
            .field("secret", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token service rejected the request: HTTP {0}")]
    Rejected(u16),
}

/// Issues short-lived database credentials for a scope.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn issue(&self, scope: &TokenScope) -> Result<DbAuthToken, TokenError>;
}

/// Client for an HTTP token-issuance endpoint.
pub struct HttpTokenService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTokenService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
    expires_in_secs: i64,
}

#[async_trait]
impl TokenProvider for HttpTokenService {
    async fn issue(&self, scope: &TokenScope) -> Result<DbAuthToken, TokenError> {
        let url = format!("{}/v1/tokens", self.base_url.trim_end_matches('/'));
        let response = self.client.post(&url).json(scope).send().await?;

        if !response.status().is_success() {
            return Err(TokenError::Rejected(response.status().as_u16()));
        }

        let body: TokenResponse = response.json().await?;
        Ok(DbAuthToken::new(
            body.token,
            Duration::seconds(body.expires_in_secs),
        ))
    }
}

/// Fixed password for local development and tests. Does not expire.
pub struct StaticTokenProvider {
    password: String,
}

impl StaticTokenProvider {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn issue(&self, _scope: &TokenScope) -> Result<DbAuthToken, TokenError> {
        Ok(DbAuthToken::new(self.password.clone(), Duration::days(3650)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let token = DbAuthToken::new("s3cret".to_string(), Duration::minutes(15));
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_expiry() {
        let live = DbAuthToken::new("t".to_string(), Duration::minutes(15));
        assert!(!live.is_expired());

        let dead = DbAuthToken::new("t".to_string(), Duration::minutes(-1));
        assert!(dead.is_expired());
    }
}
