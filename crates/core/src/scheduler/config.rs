//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the scheduling loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// How often a cycle is triggered (seconds). The reference deployment
    /// uses 5 minutes.
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Polling quantum for the countdown loop (milliseconds).
    #[serde(default = "default_poll_quantum")]
    pub poll_quantum_ms: u64,
}

fn default_interval() -> u64 {
    300
}

fn default_poll_quantum() -> u64 {
    250
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            poll_quantum_ms: default_poll_quantum(),
        }
    }
}
