//! # radarsweep-core
//!
//! Core library for the radarsweep service: periodically derives a window
//! of per-minute radar frame candidates, downloads the frames that are not
//! already on disk, and processes them into their display format.
//!
//! ## Architecture
//!
//! - **candidate**: time window derivation, naming and on-disk filtering
//! - **fetcher**: HTTP download of remote frames
//! - **transformer**: decode/resize/re-encode of downloaded frames
//! - **notify**: cycle state and progress publication to observers
//! - **orchestrator**: the two-phase acquisition cycle
//! - **scheduler**: the drift-free periodic trigger loop
//! - **config**: configuration loading and validation
//! - **testing**: mock implementations for tests

pub mod candidate;
pub mod config;
pub mod fetcher;
pub mod notify;
pub mod orchestrator;
pub mod scheduler;
pub mod testing;
pub mod transformer;

pub use candidate::{Candidate, CandidateError, CandidateSetBuilder, DateManifest, WindowPolicy};
pub use config::{
    load_config, validate_config, Config, ConfigError, SourceConfig, TransformConfig,
};
pub use fetcher::{FetchError, Fetcher, HttpFetcher};
pub use notify::{CycleEvent, CycleState, StateHub, SubscriptionId};
pub use orchestrator::{CycleError, CycleOrchestrator, CycleSummary, OrchestratorConfig};
pub use scheduler::{CountdownDisplay, CycleScheduler, NullCountdown, SchedulerConfig};
pub use transformer::{ImageTransformer, TransformError, Transformer};
