//! Cycle orchestrator implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::candidate::{Candidate, CandidateSetBuilder};
use crate::fetcher::Fetcher;
use crate::notify::{CycleState, EventCallback, StateHub, SubscriptionId};
use crate::transformer::Transformer;

use super::config::OrchestratorConfig;
use super::types::{CycleError, CycleSummary};

/// Progress of a phase after `completed` of `total` items, rounded to the
/// nearest percent. The forced end-of-phase value is assigned separately.
fn phase_progress(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// The cycle orchestrator - owns the state machine and drives both phases.
///
/// `State`, progress and the candidate list are single-cycle-scoped, so the
/// entry point is guarded: a second `run_cycle` while one is in flight fails
/// fast with [`CycleError::CycleInFlight`].
pub struct CycleOrchestrator<F, T>
where
    F: Fetcher + 'static,
    T: Transformer + 'static,
{
    config: OrchestratorConfig,
    builder: CandidateSetBuilder,
    fetcher: Arc<F>,
    transformer: Arc<T>,
    hub: Arc<StateHub>,
    busy: AtomicBool,
}

impl<F, T> CycleOrchestrator<F, T>
where
    F: Fetcher + 'static,
    T: Transformer + 'static,
{
    /// Create a new orchestrator.
    pub fn new(
        config: OrchestratorConfig,
        builder: CandidateSetBuilder,
        fetcher: Arc<F>,
        transformer: Arc<T>,
    ) -> Self {
        Self {
            config,
            builder,
            fetcher,
            transformer,
            hub: Arc::new(StateHub::new()),
            busy: AtomicBool::new(false),
        }
    }

    /// Attach a change subscriber. See [`StateHub::subscribe`].
    pub fn subscribe(&self, callback: EventCallback) -> SubscriptionId {
        self.hub.subscribe(callback)
    }

    /// Detach a change subscriber.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.hub.unsubscribe(id)
    }

    /// Current cycle state snapshot.
    pub fn state(&self) -> CycleState {
        self.hub.state()
    }

    /// Current progress snapshot.
    pub fn progress(&self) -> u8 {
        self.hub.progress()
    }

    /// Run one full cycle: build candidates, acquire, transform, return to
    /// `Waiting`.
    ///
    /// Not reentrant. Candidate-build IO errors abort the cycle and leave
    /// the state where it was; per-item fetch/transform failures are
    /// absorbed and reported in the returned [`CycleSummary`].
    pub async fn run_cycle(&self) -> Result<CycleSummary, CycleError> {
        if self.busy.swap(true, Ordering::SeqCst) {
            warn!("Rejected re-entrant cycle invocation");
            return Err(CycleError::CycleInFlight);
        }

        let result = self.run_cycle_inner().await;
        self.busy.store(false, Ordering::SeqCst);
        result
    }

    async fn run_cycle_inner(&self) -> Result<CycleSummary, CycleError> {
        self.hub.set_state(CycleState::Initializing);

        let candidates = self.builder.build(Utc::now()).await?;
        let total = candidates.len();
        info!(total, "Cycle starting");

        let (fetched, fetch_failures) = self.run_acquisition(&candidates).await;

        // The transform phase runs on its own worker so per-item latency
        // never stalls the caller's loop; the cycle still awaits it, there
        // is no pipelining between phases.
        let worker = tokio::spawn(run_transformation(
            Arc::clone(&self.transformer),
            candidates,
            Arc::clone(&self.hub),
            self.settle_delay(),
        ));
        let (transformed, missing, transform_failures) = worker
            .await
            .map_err(|e| CycleError::Worker(e.to_string()))?;

        self.hub.set_state(CycleState::Waiting);

        let summary = CycleSummary {
            total,
            fetched,
            fetch_failures,
            transformed,
            missing,
            transform_failures,
        };
        info!(?summary, "Cycle completed");

        Ok(summary)
    }

    /// Acquisition phase: fetch every candidate in order, persisting each to
    /// its local path. Fetch or persist failures skip the candidate and
    /// continue; they never abort the cycle.
    async fn run_acquisition(&self, candidates: &[Candidate]) -> (usize, usize) {
        self.hub.set_progress(0);

        let total = candidates.len();
        if total > 0 {
            self.hub.set_state(CycleState::Downloading);
        }

        let mut fetched = 0;
        let mut failures = 0;
        for (idx, candidate) in candidates.iter().enumerate() {
            match self.fetcher.fetch(&candidate.remote_url).await {
                Ok(bytes) => match fs::write(&candidate.local_path, &bytes).await {
                    Ok(()) => {
                        debug!(name = %candidate.canonical_name, "Fetched artifact");
                        fetched += 1;
                    }
                    Err(e) => {
                        warn!(
                            path = %candidate.local_path.display(),
                            "Failed to persist artifact, skipping: {}", e
                        );
                        failures += 1;
                    }
                },
                Err(e) => {
                    warn!(url = %candidate.remote_url, "Fetch failed, skipping: {}", e);
                    failures += 1;
                }
            }

            self.hub.set_progress(phase_progress(idx + 1, total));
        }

        self.hub.set_state(CycleState::DownloadCompleted);
        self.hub.set_progress(100);
        tokio::time::sleep(self.settle_delay()).await;

        (fetched, failures)
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.config.settle_delay_ms)
    }
}

/// Transformation phase, run on a spawned worker.
///
/// For each candidate whose artifact exists: `ImageProcessing`, transform,
/// `ImageProcessed`. Missing artifacts get a diagnostic and no state
/// transitions. Returns `(transformed, missing, failures)`.
async fn run_transformation<T: Transformer>(
    transformer: Arc<T>,
    candidates: Vec<Candidate>,
    hub: Arc<StateHub>,
    settle_delay: Duration,
) -> (usize, usize, usize) {
    hub.set_progress(0);

    let total = candidates.len();
    let mut transformed = 0;
    let mut missing = 0;
    let mut failures = 0;

    for (idx, candidate) in candidates.iter().enumerate() {
        if fs::try_exists(&candidate.local_path).await.unwrap_or(false) {
            hub.set_state(CycleState::ImageProcessing);
            match transformer.transform(&candidate.local_path).await {
                Ok(output) => {
                    debug!(output = %output.display(), "Transformed artifact");
                    transformed += 1;
                }
                Err(e) => {
                    warn!(name = %candidate.canonical_name, "Transform failed, skipping: {}", e);
                    failures += 1;
                }
            }
            hub.set_state(CycleState::ImageProcessed);
        } else {
            warn!(name = %candidate.canonical_name, "Artifact not found, nothing to transform");
            missing += 1;
        }

        hub.set_progress(phase_progress(idx + 1, total));
    }

    hub.set_progress(100);
    tokio::time::sleep(settle_delay).await;

    (transformed, missing, failures)
}
