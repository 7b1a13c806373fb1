//! Scheduling loop implementation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::fetcher::Fetcher;
use crate::notify::CycleState;
use crate::orchestrator::CycleOrchestrator;
use crate::transformer::Transformer;

use super::config::SchedulerConfig;
use super::countdown::CountdownDisplay;

/// Drives the orchestrator once per interval.
///
/// Keeps a target instant rather than an elapsed timer: each iteration
/// re-reads the clock, and the target only advances after the triggered
/// cycle returns, so cycles never overlap no matter how long one runs.
pub struct CycleScheduler<F, T>
where
    F: Fetcher + 'static,
    T: Transformer + 'static,
{
    config: SchedulerConfig,
    orchestrator: Arc<CycleOrchestrator<F, T>>,
    countdown: Arc<dyn CountdownDisplay>,
    shutdown_tx: broadcast::Sender<()>,
}

impl<F, T> CycleScheduler<F, T>
where
    F: Fetcher + 'static,
    T: Transformer + 'static,
{
    pub fn new(
        config: SchedulerConfig,
        orchestrator: Arc<CycleOrchestrator<F, T>>,
        countdown: Arc<dyn CountdownDisplay>,
    ) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            orchestrator,
            countdown,
            shutdown_tx,
        }
    }

    /// Request a graceful stop. An in-flight cycle runs to completion; the
    /// loop exits at the next polling check.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    /// Run the scheduling loop until shutdown. The first cycle triggers
    /// immediately.
    pub async fn run(&self) {
        let interval = Duration::from_secs(self.config.interval_secs);
        let quantum = Duration::from_millis(self.config.poll_quantum_ms);
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let mut next_run = Instant::now();

        info!(
            interval_secs = self.config.interval_secs,
            "Scheduling loop started"
        );

        loop {
            let remaining = next_run.saturating_duration_since(Instant::now());

            if remaining.is_zero() {
                self.countdown.hide();

                match self.orchestrator.run_cycle().await {
                    Ok(summary) => {
                        debug_assert_eq!(self.orchestrator.state(), CycleState::Waiting);
                        debug!(?summary, "Scheduled cycle finished");
                    }
                    Err(e) => error!("Scheduled cycle failed: {}", e),
                }

                next_run += interval;
            } else {
                self.countdown.show(remaining);

                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = tokio::time::sleep(quantum.min(remaining)) => {}
                }
            }

            // A shutdown requested while a cycle was running is honored here
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
        }

        info!("Scheduling loop stopped");
    }
}
