//! Per-account activity record synthesis.

use rand::Rng;
use rand::seq::SliceRandom;

use customer_activity::models::{AccountId, ActivityRecord, MonetaryValue};

use crate::config::ActivityGenConfig;

/// Synthesizes one activity record per account from injected domains.
pub struct ActivityGenerator {
    config: ActivityGenConfig,
}

impl ActivityGenerator {
    /// Creates a generator over the full built-in domains.
    pub fn new() -> Self {
        Self {
            config: ActivityGenConfig::default(),
        }
    }

    /// Creates a generator with substituted domains or bounds.
    pub fn with_config(config: ActivityGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ActivityGenConfig {
        &self.config
    }

    /// Draws every field independently and uniformly from its domain.
    pub fn generate(&self, account_id: AccountId, rng: &mut impl Rng) -> ActivityRecord {
        let (cents_low, cents_high) = self.config.monetary_cents;
        let (secs_low, secs_high) = self.config.time_in_app_secs;

        ActivityRecord {
            account_id,
            city: *self.config.cities.choose(rng).expect("city domain is empty"),
            transaction_type: *self
                .config
                .transaction_types
                .choose(rng)
                .expect("transaction type domain is empty"),
            monetary_value: MonetaryValue::from_cents(rng.gen_range(cents_low..=cents_high)),
            time_in_app_secs: rng.gen_range(secs_low..=secs_high),
            feature_used: *self
                .config
                .features
                .choose(rng)
                .expect("feature domain is empty"),
        }
    }
}

impl Default for ActivityGenerator {
    fn default() -> Self {
        Self::new()
    }
}
