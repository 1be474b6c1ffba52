//! Paced, strictly sequential replay of the account pool into a sink.

use rand::Rng;
use tracing::{info, warn};

use customer_activity::database::ActivitySink;
use customer_activity::models::{AccountId, ActivityRecord};

use crate::config::{FailurePolicy, ReplayConfig};
use crate::error::SeedError;
use crate::generators::ActivityGenerator;

/// Counts from a finished replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Records accepted by the sink.
    pub submitted: usize,
    /// Records dropped under [`FailurePolicy::Skip`].
    pub skipped: usize,
}

/// Drains a prefix of the account pool into the sink, one record at a time.
pub struct Replayer<S> {
    sink: S,
    generator: ActivityGenerator,
    config: ReplayConfig,
}

impl<S: ActivitySink> Replayer<S> {
    pub fn new(sink: S, generator: ActivityGenerator, config: ReplayConfig) -> Self {
        Self {
            sink,
            generator,
            config,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Processes the first `limit` accounts in pool order.
    ///
    /// Each record is fully committed before the next is synthesized, with
    /// at least the configured pace between consecutive submissions. A
    /// failed submission is routed through the configured [`FailurePolicy`].
    pub async fn replay(
        &self,
        pool: &[AccountId],
        rng: &mut impl Rng,
    ) -> Result<ReplayReport, SeedError> {
        self.generator.config().validate()?;

        let total = pool.len().min(self.config.limit);
        let mut report = ReplayReport::default();

        for (index, &account_id) in pool.iter().take(total).enumerate() {
            if index > 0 {
                tokio::time::sleep(self.config.pace).await;
            }

            let record = self.generator.generate(account_id, rng);
            if self.submit_one(&record).await? {
                report.submitted += 1;
                info!(
                    "inserted activity for account {account_id} ({}/{total})",
                    index + 1
                );
            } else {
                report.skipped += 1;
            }
        }

        Ok(report)
    }

    /// Submits one record under the failure policy. `Ok(false)` means the
    /// record was dropped under [`FailurePolicy::Skip`].
    async fn submit_one(&self, record: &ActivityRecord) -> Result<bool, SeedError> {
        match self.config.on_error {
            FailurePolicy::Abort => {
                self.sink.submit(record).await?;
                Ok(true)
            }
            FailurePolicy::Skip => match self.sink.submit(record).await {
                Ok(()) => Ok(true),
                Err(err) => {
                    warn!("skipping account {}: {err}", record.account_id);
                    Ok(false)
                }
            },
            FailurePolicy::Retry { attempts } => {
                let mut tries = 0;
                loop {
                    match self.sink.submit(record).await {
                        Ok(()) => return Ok(true),
                        Err(err) if tries < attempts => {
                            tries += 1;
                            warn!(
                                "resubmitting account {} ({tries}/{attempts}): {err}",
                                record.account_id
                            );
                            tokio::time::sleep(self.config.pace).await;
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
            }
        }
    }
}
