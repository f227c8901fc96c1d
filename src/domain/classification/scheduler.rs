//! Delayed classification jobs.
//!
//! Every text change gets its own job: sleep for the configured delay, run the
//! classifier, hand the verdict back to the store. Jobs are never cancelled
//! individually. A job whose revision was superseded or deleted in the
//! meantime simply loses at commit time (`CommitOutcome::Stale` / `Missing`).

use crate::domain::classification::Classifier;
use crate::domain::Revision;
use crate::storage::{CommitOutcome, MessageStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Spawns and tracks classification jobs for one store.
pub struct ClassificationScheduler {
    store: Arc<MessageStore>,
    classifier: Arc<dyn Classifier>,
    delay: Duration,
    /// Number of jobs spawned and not yet finished (committed, dropped or stopped).
    in_flight: Arc<AtomicUsize>,
    /// Cancelled once; running jobs stop waiting and exit without committing.
    shutdown: CancellationToken,
}

/// Decrements the in-flight counter however the job ends, panics included.
struct InFlightGuard(Arc<AtomicUsize>);

impl InFlightGuard {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter.clone())
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ClassificationScheduler {
    pub fn new(store: Arc<MessageStore>, classifier: Arc<dyn Classifier>, delay: Duration) -> Self {
        Self {
            store,
            classifier,
            delay,
            in_flight: Arc::new(AtomicUsize::new(0)),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Starts the job for `revision`. Must be called from inside a Tokio runtime.
    ///
    /// Returns immediately; the caller never waits on classification.
    pub fn schedule(&self, revision: Revision) {
        if self.is_shut_down() {
            warn!(
                id = revision.id,
                generation = revision.generation,
                "scheduler is shut down, message stays pending"
            );
            return;
        }

        let store = self.store.clone();
        let classifier = self.classifier.clone();
        let delay = self.delay;
        let shutdown = self.shutdown.clone();
        let guard = InFlightGuard::enter(&self.in_flight);

        tokio::spawn(async move {
            let _guard = guard;

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown.cancelled() => {
                    debug!(id = revision.id, generation = revision.generation, "job stopped by shutdown");
                    return;
                }
            }

            let verdict = classifier.classify(&revision.text);
            let outcome = store
                .commit_classification(revision.id, revision.generation, verdict.into())
                .await;

            match outcome {
                CommitOutcome::Applied => debug!(
                    id = revision.id,
                    generation = revision.generation,
                    classifier = classifier.name(),
                    verdict,
                    "classification applied"
                ),
                CommitOutcome::Stale { current_generation } => debug!(
                    id = revision.id,
                    generation = revision.generation,
                    current_generation,
                    "classification dropped, text changed"
                ),
                CommitOutcome::Missing => debug!(
                    id = revision.id,
                    generation = revision.generation,
                    "classification dropped, message deleted"
                ),
            }
        });
    }

    /// Stops all running jobs and refuses new ones. Idempotent.
    pub fn shutdown(&self) {
        let was_running = !self.shutdown.is_cancelled();
        self.shutdown.cancel();
        if was_running {
            info!(in_flight = self.in_flight(), "classification scheduler shutting down");
        }
    }
}
