//! Scheduler timing integration tests.
//!
//! These run under paused tokio time, so sleeps auto-advance and the
//! interval arithmetic can be asserted exactly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::TempDir;
use tokio::time::Instant;

use radarsweep_core::{
    notify::CycleEvent,
    testing::{MockFetcher, MockTransformer},
    CandidateSetBuilder, CountdownDisplay, CycleOrchestrator, CycleScheduler, CycleState,
    NullCountdown, OrchestratorConfig, SchedulerConfig, SourceConfig,
};

struct TestHarness {
    fetcher: Arc<MockFetcher>,
    orchestrator: Arc<CycleOrchestrator<MockFetcher, MockTransformer>>,
    _temp_dir: TempDir,
}

impl TestHarness {
    fn new(window_size: usize) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let fetcher = Arc::new(MockFetcher::new());

        let source = SourceConfig {
            base_url: "http://radar.test/{stamp}.png".to_string(),
            window_size,
            extension: "png".to_string(),
            timeout_secs: 5,
        };
        let builder = CandidateSetBuilder::new(source, temp_dir.path().to_path_buf());
        let orchestrator = Arc::new(CycleOrchestrator::new(
            OrchestratorConfig { settle_delay_ms: 0 },
            builder,
            Arc::clone(&fetcher),
            Arc::new(MockTransformer::new()),
        ));

        Self {
            fetcher,
            orchestrator,
            _temp_dir: temp_dir,
        }
    }

    /// Record the instant each cycle enters `Initializing`.
    fn record_cycle_starts(&self) -> Arc<Mutex<Vec<Instant>>> {
        let starts: Arc<Mutex<Vec<Instant>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&starts);
        self.orchestrator.subscribe(Arc::new(move |event| {
            if event == CycleEvent::State(CycleState::Initializing) {
                sink.lock().unwrap().push(Instant::now());
            }
        }));
        starts
    }

    fn create_scheduler(
        &self,
        interval_secs: u64,
        countdown: Arc<dyn CountdownDisplay>,
    ) -> Arc<CycleScheduler<MockFetcher, MockTransformer>> {
        let config = SchedulerConfig {
            interval_secs,
            poll_quantum_ms: 250,
        };
        Arc::new(CycleScheduler::new(
            config,
            Arc::clone(&self.orchestrator),
            countdown,
        ))
    }
}

/// Countdown display recording show/hide invocations.
#[derive(Default)]
struct RecordingCountdown {
    shows: AtomicUsize,
    hides: AtomicUsize,
    last_remaining_ms: Mutex<Option<u128>>,
}

impl CountdownDisplay for RecordingCountdown {
    fn show(&self, remaining: Duration) {
        self.shows.fetch_add(1, Ordering::SeqCst);
        *self.last_remaining_ms.lock().unwrap() = Some(remaining.as_millis());
    }

    fn hide(&self) {
        self.hides.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test(start_paused = true)]
async fn test_first_cycle_triggers_immediately() {
    let harness = TestHarness::new(2);
    let starts = harness.record_cycle_starts();
    let scheduler = harness.create_scheduler(5, Arc::new(NullCountdown));

    let begun = Instant::now();
    let runner = Arc::clone(&scheduler);
    let task = tokio::spawn(async move { runner.run().await });

    tokio::time::sleep(Duration::from_secs(1)).await;
    scheduler.shutdown();
    task.await.unwrap();

    let starts = starts.lock().unwrap();
    assert_eq!(starts.len(), 1);
    assert!(starts[0] - begun < Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_cycles_are_spaced_by_the_interval() {
    let harness = TestHarness::new(2);
    let starts = harness.record_cycle_starts();
    let scheduler = harness.create_scheduler(5, Arc::new(NullCountdown));

    let runner = Arc::clone(&scheduler);
    let task = tokio::spawn(async move { runner.run().await });

    tokio::time::sleep(Duration::from_secs(11)).await;
    scheduler.shutdown();
    task.await.unwrap();

    let starts = starts.lock().unwrap();
    assert_eq!(starts.len(), 3);
    for pair in starts.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= Duration::from_secs(5), "gap was {:?}", gap);
        assert!(gap < Duration::from_millis(5500), "gap was {:?}", gap);
    }
}

#[tokio::test(start_paused = true)]
async fn test_overrunning_cycle_defers_the_next_trigger() {
    let harness = TestHarness::new(1);
    harness
        .fetcher
        .set_fetch_duration(Duration::from_secs(7))
        .await;
    let starts = harness.record_cycle_starts();
    let scheduler = harness.create_scheduler(5, Arc::new(NullCountdown));

    let runner = Arc::clone(&scheduler);
    let task = tokio::spawn(async move { runner.run().await });

    tokio::time::sleep(Duration::from_secs(8)).await;
    scheduler.shutdown();
    task.await.unwrap();

    let starts = starts.lock().unwrap();
    assert_eq!(starts.len(), 2);
    // The second cycle never fires mid-flight; it triggers right after the
    // overrunning one completes, past the nominal interval.
    let gap = starts[1] - starts[0];
    assert!(gap >= Duration::from_secs(7), "gap was {:?}", gap);
}

#[tokio::test(start_paused = true)]
async fn test_countdown_is_shown_while_waiting_and_hidden_on_trigger() {
    let harness = TestHarness::new(1);
    let countdown = Arc::new(RecordingCountdown::default());
    let countdown_arg: Arc<dyn CountdownDisplay> = countdown.clone();
    let scheduler = harness.create_scheduler(5, countdown_arg);

    let runner = Arc::clone(&scheduler);
    let task = tokio::spawn(async move { runner.run().await });

    tokio::time::sleep(Duration::from_secs(6)).await;
    scheduler.shutdown();
    task.await.unwrap();

    // Hidden once per triggered cycle, shown once per idle quantum
    assert_eq!(countdown.hides.load(Ordering::SeqCst), 2);
    assert!(countdown.shows.load(Ordering::SeqCst) > 10);
    let last = countdown.last_remaining_ms.lock().unwrap().unwrap();
    assert!(last <= 5_000);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_during_wait_stops_promptly() {
    let harness = TestHarness::new(1);
    let scheduler = harness.create_scheduler(300, Arc::new(NullCountdown));

    let runner = Arc::clone(&scheduler);
    let task = tokio::spawn(async move { runner.run().await });

    // Let the immediate first cycle finish, then stop mid-wait
    tokio::time::sleep(Duration::from_secs(2)).await;
    scheduler.shutdown();

    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("scheduler did not stop after shutdown")
        .unwrap();

    assert_eq!(harness.fetcher.fetch_count().await, 1);
}
