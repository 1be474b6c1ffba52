//! Customer-activity domain for the demo database.
//!
//! This crate owns the record types the seeding pipeline produces, the
//! credential contract for the managed database, the insert sink, and the
//! schema objects a replication consumer expects. Everything that touches
//! the database lives here; generation and replay policy live in the
//! `seed-data` crate.

pub mod credentials;
pub mod database;
pub mod errors;
pub mod models;
pub mod schema;

pub use credentials::{
    DbAuthToken, HttpTokenService, StaticTokenProvider, TokenError, TokenProvider, TokenScope,
};
pub use database::{ActivitySink, MySqlActivitySink, SinkConfig};
pub use errors::StoreError;
pub use models::{AccountId, ActivityRecord, City, Feature, MonetaryValue, TransactionType};
