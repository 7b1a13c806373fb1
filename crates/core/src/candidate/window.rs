//! Clock and window policy.
//!
//! Pure derivation of the per-cycle instant list from the wall clock: round
//! the current instant down to the minute, then step backward one minute at a
//! time for a fixed window. No side effects here; the manifest append lives
//! in [`super::manifest`].

use chrono::{DateTime, Duration, DurationRound, Utc};

/// Placeholder in the base URL template replaced by the compact stamp.
pub const STAMP_PLACEHOLDER: &str = "{stamp}";

/// Compact numeric stamp used in remote URLs (`yyyyMMddHHmm`).
pub fn compact_stamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%d%H%M").to_string()
}

/// Separated stamp used as the canonical local artifact name
/// (`yyyy_MM_dd_HH_mm`).
pub fn canonical_stamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y_%m_%d_%H_%M").to_string()
}

/// Round an instant down to the start of its minute.
pub fn floor_to_minute(instant: DateTime<Utc>) -> DateTime<Utc> {
    // duration_trunc(1 minute) cannot fail for sane instants
    instant
        .duration_trunc(Duration::minutes(1))
        .unwrap_or(instant)
}

/// Derives the ordered instant window for a cycle.
#[derive(Debug, Clone, Copy)]
pub struct WindowPolicy {
    window_size: usize,
}

impl WindowPolicy {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Number of instants per window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Emit `window_size` instants, current minute first, stepping backward
    /// one minute at a time. Deterministic for a given clock input: any two
    /// calls within the same minute produce the same list.
    pub fn instants(&self, now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let start = floor_to_minute(now);
        (0..self.window_size as i64)
            .map(|i| start - Duration::minutes(i))
            .collect()
    }
}
