//! Generators for seed data.
//!
//! - [`AccountPoolGenerator`]: draw distinct account numbers for the pool
//! - [`ActivityGenerator`]: synthesize activity records for drawn accounts

pub mod account;
pub mod activity;

pub use account::AccountPoolGenerator;
pub use activity::ActivityGenerator;
