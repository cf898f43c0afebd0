//! Re-verification of usage records.
//!
//! Each request schedules one task per record id. After the configured delay
//! the task reloads the record from the data source and compares its locally
//! calculated hash with the ledger hash. Outcomes are kept per id; the
//! underlying dataset is never modified.
//!
//! Starting a record again supersedes its running task. Tasks for different
//! records run independently.

use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    config::VerificationConfig,
    error::AppResult,
    models::VerifyStatus,
    repository::Repository,
};

struct InFlight {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Clone, Copy)]
struct Outcome {
    verified: bool,
    checked_at: DateTime<Utc>,
}

#[derive(Default)]
struct Registry {
    next_generation: u64,
    in_flight: HashMap<String, InFlight>,
    outcomes: HashMap<String, Outcome>,
}

#[derive(Clone)]
pub struct VerificationService {
    repository: Repository,
    delay: Duration,
    registry: Arc<Mutex<Registry>>,
}

impl VerificationService {
    pub fn new(repository: Repository, config: &VerificationConfig) -> Self {
        Self {
            repository,
            delay: Duration::from_millis(config.delay_ms),
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    /// Schedule a re-verification of `id`
    pub async fn start(&self, id: &str) -> AppResult<VerifyStatus> {
        self.repository.usage_get_by_id(id).await?;

        let mut registry = self.registry.lock().await;
        registry.next_generation += 1;
        let generation = registry.next_generation;

        if let Some(previous) = registry.in_flight.remove(id) {
            previous.handle.abort();
            tracing::debug!("Superseded pending verification of {}", id);
        }

        let service = self.clone();
        let record_id = id.to_string();
        let handle = tokio::spawn(async move { service.run(record_id, generation).await });
        registry
            .in_flight
            .insert(id.to_string(), InFlight { generation, handle });

        tracing::info!("Verification of {} scheduled in {:?}", id, self.delay);
        Ok(VerifyStatus::verifying(id))
    }

    async fn run(self, record_id: String, generation: u64) {
        tokio::time::sleep(self.delay).await;
        let reloaded = self.repository.usage_get_by_id(&record_id).await;

        let mut registry = self.registry.lock().await;
        match registry.in_flight.get(&record_id) {
            Some(current) if current.generation == generation => {}
            _ => {
                tracing::debug!("Dropping stale verification result for {}", record_id);
                return;
            }
        }
        registry.in_flight.remove(&record_id);

        match reloaded {
            Ok(record) => {
                let verified = record.hashes_match();
                if verified != record.verified {
                    tracing::warn!(
                        "Usage record {} is flagged verified={} but hashes {}",
                        record_id,
                        record.verified,
                        if verified { "match" } else { "differ" }
                    );
                }
                tracing::info!("Verification of {} completed: verified={}", record_id, verified);
                registry.outcomes.insert(
                    record_id,
                    Outcome {
                        verified,
                        checked_at: Utc::now(),
                    },
                );
            }
            Err(e) => {
                tracing::warn!("Verification of {} failed: {}", record_id, e);
            }
        }
    }

    /// Current verification state of `id`
    pub async fn status(&self, id: &str) -> AppResult<VerifyStatus> {
        self.repository.usage_get_by_id(id).await?;
        Ok(self.lookup(id).await)
    }

    async fn lookup(&self, id: &str) -> VerifyStatus {
        let registry = self.registry.lock().await;
        if registry.in_flight.contains_key(id) {
            return VerifyStatus::verifying(id);
        }
        match registry.outcomes.get(id) {
            Some(outcome) => VerifyStatus::completed(id, outcome.verified, outcome.checked_at),
            None => VerifyStatus::idle(id),
        }
    }

    /// Abort a pending verification. Returns whether one was running.
    pub async fn cancel(&self, id: &str) -> bool {
        let mut registry = self.registry.lock().await;
        match registry.in_flight.remove(id) {
            Some(task) => {
                task.handle.abort();
                tracing::info!("Verification of {} cancelled", id);
                true
            }
            None => false,
        }
    }

    /// Cancel every pending verification whose record is not in `visible`.
    /// Returns the number of tasks cancelled.
    pub async fn retain(&self, visible: &[String]) -> usize {
        let mut registry = self.registry.lock().await;
        let stale: Vec<String> = registry
            .in_flight
            .keys()
            .filter(|id| !visible.contains(*id))
            .cloned()
            .collect();

        for id in &stale {
            if let Some(task) = registry.in_flight.remove(id) {
                task.handle.abort();
            }
        }
        if !stale.is_empty() {
            tracing::info!("Cancelled {} verification(s) no longer displayed", stale.len());
        }
        stale.len()
    }

    /// Ids with a pending verification, sorted
    pub async fn verifying_ids(&self) -> Vec<String> {
        let registry = self.registry.lock().await;
        let mut ids: Vec<String> = registry.in_flight.keys().cloned().collect();
        ids.sort();
        ids
    }
}
