//! Cycle orchestrator.
//!
//! Drives one full cycle through the state machine:
//! - **Candidate build**: window derivation, manifest append, existence filter
//! - **Acquisition**: sequential fetch of each candidate - IO-bound
//! - **Transformation**: sequential transform on a spawned worker, awaited
//!
//! Exactly one cycle runs at a time; a second invocation while one is in
//! flight fails fast.

mod config;
mod runner;
mod types;

pub use config::OrchestratorConfig;
pub use runner::CycleOrchestrator;
pub use types::{CycleError, CycleSummary};
