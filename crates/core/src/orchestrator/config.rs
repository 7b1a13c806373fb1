//! Orchestrator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the cycle orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Pause after each phase forces progress to 100, before the next phase
    /// resets it, so observers get to render the final value (milliseconds).
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

fn default_settle_delay() -> u64 {
    1500
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay(),
        }
    }
}
