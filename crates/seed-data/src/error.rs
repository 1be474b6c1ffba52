use thiserror::Error;

/// Errors from pool generation, the artifact, and replay.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot draw {count} distinct accounts from [{low}, {high})")]
    InvalidRange { low: i64, high: i64, count: usize },

    #[error("{domain} domain is empty")]
    EmptyDomain { domain: &'static str },

    #[error("{field} bounds are inverted")]
    InvalidBounds { field: &'static str },

    #[error("artifact error: {0}")]
    Artifact(#[from] std::io::Error),

    #[error("malformed account id {value:?} at line {line}")]
    MalformedAccountId { line: usize, value: String },

    #[error(transparent)]
    Store(#[from] customer_activity::StoreError),
}
