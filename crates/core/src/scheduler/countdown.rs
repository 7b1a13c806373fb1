//! Countdown display contract.

use std::time::Duration;

/// Renders the between-cycle countdown.
///
/// The core owns no presentation; callers supply an implementation (or
/// [`NullCountdown`]) and marshal any display-context affinity themselves.
pub trait CountdownDisplay: Send + Sync {
    /// Called once per polling quantum with the remaining time to the next
    /// cycle.
    fn show(&self, remaining: Duration);

    /// Called right before a cycle is triggered.
    fn hide(&self);
}

/// Countdown display that renders nothing.
#[derive(Debug, Default)]
pub struct NullCountdown;

impl CountdownDisplay for NullCountdown {
    fn show(&self, _remaining: Duration) {}

    fn hide(&self) {}
}
