//! Types for the cycle orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a cycle.
///
/// Per-item failures (fetch, persist, transform, missing artifact) are
/// absorbed by the phase runners and surface only in the [`CycleSummary`].
#[derive(Debug, Error)]
pub enum CycleError {
    /// A cycle is already in flight on this orchestrator.
    #[error("a cycle is already in flight")]
    CycleInFlight,

    /// Candidate set construction failed (work folder or manifest IO).
    #[error("candidate build failed: {0}")]
    Candidates(#[from] crate::candidate::CandidateError),

    /// The transform worker was cancelled or panicked.
    #[error("transform worker failed: {0}")]
    Worker(String),
}

/// Outcome of one completed cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSummary {
    /// Size of the reduced candidate list.
    pub total: usize,
    /// Candidates fetched and persisted.
    pub fetched: usize,
    /// Candidates skipped because fetch or persist failed.
    pub fetch_failures: usize,
    /// Artifacts transformed into derived form.
    pub transformed: usize,
    /// Candidates whose local artifact was missing at transform time.
    pub missing: usize,
    /// Artifacts that failed to transform.
    pub transform_failures: usize,
}
