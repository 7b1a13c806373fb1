//! Log-based countdown rendering.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::info;

use radarsweep_core::CountdownDisplay;

/// Sentinel for "no countdown currently displayed".
const IDLE: u64 = u64::MAX;

/// Renders the between-cycle countdown as log lines.
///
/// The scheduler calls `show` once per polling quantum; emitting a line per
/// call would flood the log, so this deduplicates on the whole-second value
/// and only logs when it changes.
#[derive(Debug)]
pub struct LogCountdown {
    last_whole_secs: AtomicU64,
}

impl LogCountdown {
    pub fn new() -> Self {
        Self {
            last_whole_secs: AtomicU64::new(IDLE),
        }
    }
}

impl Default for LogCountdown {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownDisplay for LogCountdown {
    fn show(&self, remaining: Duration) {
        let secs = remaining.as_secs();
        if self.last_whole_secs.swap(secs, Ordering::Relaxed) != secs {
            info!(remaining_secs = secs, "Next cycle in {}s", secs);
        }
    }

    fn hide(&self) {
        self.last_whole_secs.store(IDLE, Ordering::Relaxed);
    }
}
