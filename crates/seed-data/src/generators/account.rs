//! Uniform without-replacement sampling of account numbers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use customer_activity::models::AccountId;

use crate::config::PoolConfig;
use crate::error::SeedError;

/// Draws a pool of distinct account numbers from a configured range.
pub struct AccountPoolGenerator {
    config: PoolConfig,
}

impl AccountPoolGenerator {
    pub fn new(config: PoolConfig) -> Self {
        Self { config }
    }

    /// Draws the pool with a caller-supplied rng.
    ///
    /// The emitted order is the sampler's draw order; for a fixed rng state
    /// the sequence is fully reproducible. The sampler switches between a
    /// partial shuffle and rejection sampling, so the candidate range is
    /// never materialized when it dwarfs the requested count.
    pub fn generate_with(&self, rng: &mut impl Rng) -> Result<Vec<AccountId>, SeedError> {
        self.config.validate()?;

        let span = (self.config.range_high as i128 - self.config.range_low as i128) as usize;
        let picks = rand::seq::index::sample(rng, span, self.config.count);

        Ok(picks
            .into_iter()
            .map(|offset| self.config.range_low + offset as i64)
            .collect())
    }

    /// Draws the pool, seeding the rng from the config.
    pub fn generate(&self) -> Result<Vec<AccountId>, SeedError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }
}
