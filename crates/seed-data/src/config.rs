//! Configuration for pool generation and replay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use customer_activity::models::{City, Feature, TransactionType};

use crate::error::SeedError;

/// Sizing of the generated account pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Lower bound of the account-number range (inclusive).
    pub range_low: i64,
    /// Upper bound of the account-number range (exclusive).
    pub range_high: i64,
    /// Number of distinct accounts to draw.
    pub count: usize,
    /// Fixed seed for a reproducible pool.
    pub seed: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            range_low: 100_000,
            range_high: 1_000_000,
            count: 500_000,
            seed: None,
        }
    }
}

impl PoolConfig {
    /// Checks that the range is non-empty and holds at least `count`
    /// distinct values. Runs before any artifact I/O.
    pub fn validate(&self) -> Result<(), SeedError> {
        let span = self.range_high as i128 - self.range_low as i128;
        if span <= 0 || (self.count as i128) > span || span > usize::MAX as i128 {
            return Err(SeedError::InvalidRange {
                low: self.range_low,
                high: self.range_high,
                count: self.count,
            });
        }
        Ok(())
    }
}

/// Domains and bounds for synthesized activity records.
///
/// Every domain is injected here rather than read from module state, so
/// alternate sets can be substituted per run or per test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityGenConfig {
    pub cities: Vec<City>,
    pub transaction_types: Vec<TransactionType>,
    pub features: Vec<Feature>,
    /// Monetary value bounds in cents, both inclusive.
    pub monetary_cents: (i64, i64),
    /// Session length bounds in seconds, both inclusive.
    pub time_in_app_secs: (i16, i16),
}

impl Default for ActivityGenConfig {
    fn default() -> Self {
        Self {
            cities: City::ALL.to_vec(),
            transaction_types: TransactionType::ALL.to_vec(),
            features: Feature::ALL.to_vec(),
            monetary_cents: (10_000, 1_000_000),
            time_in_app_secs: (100, 180),
        }
    }
}

impl ActivityGenConfig {
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.cities.is_empty() {
            return Err(SeedError::EmptyDomain { domain: "city" });
        }
        if self.transaction_types.is_empty() {
            return Err(SeedError::EmptyDomain {
                domain: "transaction type",
            });
        }
        if self.features.is_empty() {
            return Err(SeedError::EmptyDomain { domain: "feature" });
        }
        if self.monetary_cents.0 > self.monetary_cents.1 {
            return Err(SeedError::InvalidBounds {
                field: "monetary value",
            });
        }
        if self.time_in_app_secs.0 > self.time_in_app_secs.1 {
            return Err(SeedError::InvalidBounds {
                field: "session length",
            });
        }
        Ok(())
    }
}

/// What to do when a single submission fails mid-replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Stop the run on the first failed submission.
    #[default]
    Abort,
    /// Log the failure and move on to the next account.
    Skip,
    /// Re-submit up to `attempts` extra times, then stop the run.
    Retry { attempts: u32 },
}

/// Pacing and bounds for a replay run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Maximum number of accounts to process, as a prefix of the pool.
    pub limit: usize,
    /// Minimum delay between consecutive submissions.
    pub pace: Duration,
    pub on_error: FailurePolicy,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            limit: 1000,
            pace: Duration::from_secs(5),
            on_error: FailurePolicy::default(),
        }
    }
}
