//! Seed-data tooling for the customer-activity demo database.
//!
//! Draws a pool of unique synthetic account numbers, persists it as a
//! newline-delimited artifact, and replays a prefix of it as paced activity
//! inserts against the store. Three binaries wrap the library: `generate`,
//! `setup`, and `replay`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = AccountPoolGenerator::new(PoolConfig::default()).generate()?;
//! artifact::write_pool("account_ids.txt", &pool)?;
//!
//! let replayer = Replayer::new(sink, ActivityGenerator::new(), ReplayConfig::default());
//! let report = replayer.replay(&pool, &mut rng).await?;
//! ```

pub mod artifact;
pub mod cli;
pub mod config;
pub mod error;
pub mod generators;
pub mod replay;

pub use error::SeedError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::artifact::{read_pool, write_pool};
    pub use crate::config::{ActivityGenConfig, FailurePolicy, PoolConfig, ReplayConfig};
    pub use crate::error::SeedError;
    pub use crate::generators::{AccountPoolGenerator, ActivityGenerator};
    pub use crate::replay::{ReplayReport, Replayer};
}
