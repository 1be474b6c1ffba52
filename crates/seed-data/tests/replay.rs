//! Replay semantics against an in-memory sink: prefix bounds, ordering,
//! pacing, and per-record failure policies.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use customer_activity::database::ActivitySink;
use customer_activity::errors::StoreError;
use customer_activity::models::{AccountId, ActivityRecord, City, Feature, TransactionType};
use seed_data::config::{ActivityGenConfig, FailurePolicy, ReplayConfig};
use seed_data::error::SeedError;
use seed_data::generators::ActivityGenerator;
use seed_data::replay::Replayer;

/// Sink that records accepted submissions and fails a configured number of
/// times per account. `u32::MAX` failures means the account fails forever.
#[derive(Default)]
struct RecordingSink {
    accepted: Mutex<Vec<ActivityRecord>>,
    failures: Mutex<HashMap<AccountId, u32>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self::default()
    }

    fn failing(accounts: &[(AccountId, u32)]) -> Self {
        Self {
            accepted: Mutex::new(Vec::new()),
            failures: Mutex::new(accounts.iter().copied().collect()),
        }
    }

    fn accepted_ids(&self) -> Vec<AccountId> {
        self.accepted
            .lock()
            .unwrap()
            .iter()
            .map(|record| record.account_id)
            .collect()
    }
}

#[async_trait]
impl ActivitySink for RecordingSink {
    async fn submit(&self, record: &ActivityRecord) -> Result<(), StoreError> {
        {
            let mut failures = self.failures.lock().unwrap();
            if let Some(remaining) = failures.get_mut(&record.account_id) {
                if *remaining > 0 {
                    if *remaining != u32::MAX {
                        *remaining -= 1;
                    }
                    return Err(StoreError::Database(sqlx::Error::PoolClosed));
                }
            }
        }
        self.accepted.lock().unwrap().push(record.clone());
        Ok(())
    }
}

fn quick(limit: usize, on_error: FailurePolicy) -> ReplayConfig {
    ReplayConfig {
        limit,
        pace: Duration::ZERO,
        on_error,
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(99)
}

#[tokio::test]
async fn test_replay_covers_prefix_in_order() {
    let pool: Vec<AccountId> = vec![10, 20, 30, 40, 50, 60];
    let replayer = Replayer::new(
        RecordingSink::new(),
        ActivityGenerator::new(),
        quick(4, FailurePolicy::Abort),
    );

    let report = replayer.replay(&pool, &mut rng()).await.unwrap();

    assert_eq!(report.submitted, 4);
    assert_eq!(report.skipped, 0);
    assert_eq!(replayer.sink().accepted_ids(), vec![10, 20, 30, 40]);
}

#[tokio::test]
async fn test_limit_beyond_pool_processes_everything() {
    let pool: Vec<AccountId> = vec![1, 2, 3];
    let replayer = Replayer::new(
        RecordingSink::new(),
        ActivityGenerator::new(),
        quick(1000, FailurePolicy::Abort),
    );

    let report = replayer.replay(&pool, &mut rng()).await.unwrap();

    assert_eq!(report.submitted, 3);
    assert_eq!(replayer.sink().accepted_ids(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_rejected_first_submission_aborts_with_nothing_committed() {
    let pool: Vec<AccountId> = vec![10, 20, 30];
    let replayer = Replayer::new(
        RecordingSink::failing(&[(10, u32::MAX)]),
        ActivityGenerator::new(),
        quick(10, FailurePolicy::Abort),
    );

    let err = replayer.replay(&pool, &mut rng()).await.unwrap_err();

    assert!(matches!(err, SeedError::Store(_)));
    assert!(replayer.sink().accepted_ids().is_empty());
}

#[tokio::test]
async fn test_skip_policy_continues_past_failures() {
    let pool: Vec<AccountId> = vec![10, 20, 30];
    let replayer = Replayer::new(
        RecordingSink::failing(&[(20, u32::MAX)]),
        ActivityGenerator::new(),
        quick(10, FailurePolicy::Skip),
    );

    let report = replayer.replay(&pool, &mut rng()).await.unwrap();

    assert_eq!(report.submitted, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(replayer.sink().accepted_ids(), vec![10, 30]);
}

#[tokio::test]
async fn test_retry_policy_recovers_transient_failures() {
    let pool: Vec<AccountId> = vec![10, 20, 30];
    let replayer = Replayer::new(
        RecordingSink::failing(&[(20, 2)]),
        ActivityGenerator::new(),
        quick(10, FailurePolicy::Retry { attempts: 3 }),
    );

    let report = replayer.replay(&pool, &mut rng()).await.unwrap();

    assert_eq!(report.submitted, 3);
    assert_eq!(replayer.sink().accepted_ids(), vec![10, 20, 30]);
}

#[tokio::test]
async fn test_retry_policy_gives_up_after_attempts() {
    let pool: Vec<AccountId> = vec![10, 20, 30];
    let replayer = Replayer::new(
        RecordingSink::failing(&[(20, u32::MAX)]),
        ActivityGenerator::new(),
        quick(10, FailurePolicy::Retry { attempts: 1 }),
    );

    let err = replayer.replay(&pool, &mut rng()).await.unwrap_err();

    assert!(matches!(err, SeedError::Store(_)));
    assert_eq!(replayer.sink().accepted_ids(), vec![10]);
}

#[tokio::test(start_paused = true)]
async fn test_pacing_waits_between_submissions() {
    let pool: Vec<AccountId> = vec![1, 2, 3];
    let config = ReplayConfig {
        limit: 10,
        pace: Duration::from_secs(5),
        on_error: FailurePolicy::Abort,
    };
    let replayer = Replayer::new(RecordingSink::new(), ActivityGenerator::new(), config);

    let started = tokio::time::Instant::now();
    replayer.replay(&pool, &mut rng()).await.unwrap();

    // Two gaps between three submissions; no wait after the last.
    assert!(started.elapsed() >= Duration::from_secs(10));
    assert!(started.elapsed() < Duration::from_secs(15));
}

#[tokio::test]
async fn test_substituted_domains_reach_the_sink() {
    let pool: Vec<AccountId> = vec![7, 8];
    let generator = ActivityGenerator::with_config(ActivityGenConfig {
        cities: vec![City::Maa],
        transaction_types: vec![TransactionType::Credit],
        features: vec![Feature::Enquiry],
        monetary_cents: (10_000, 10_000),
        time_in_app_secs: (150, 150),
    });
    let replayer = Replayer::new(
        RecordingSink::new(),
        generator,
        quick(10, FailurePolicy::Abort),
    );

    replayer.replay(&pool, &mut rng()).await.unwrap();

    let accepted = replayer.sink().accepted.lock().unwrap().clone();
    assert_eq!(accepted.len(), 2);
    for record in accepted {
        assert_eq!(record.city, City::Maa);
        assert_eq!(record.transaction_type, TransactionType::Credit);
        assert_eq!(record.feature_used, Feature::Enquiry);
        assert_eq!(record.monetary_value.cents(), 10_000);
        assert_eq!(record.time_in_app_secs, 150);
    }
}

#[tokio::test]
async fn test_empty_domain_fails_before_any_submission() {
    let pool: Vec<AccountId> = vec![1, 2];
    let generator = ActivityGenerator::with_config(ActivityGenConfig {
        cities: Vec::new(),
        ..ActivityGenConfig::default()
    });
    let replayer = Replayer::new(
        RecordingSink::new(),
        generator,
        quick(10, FailurePolicy::Abort),
    );

    let err = replayer.replay(&pool, &mut rng()).await.unwrap_err();

    assert!(matches!(err, SeedError::EmptyDomain { .. }));
    assert!(replayer.sink().accepted_ids().is_empty());
}
