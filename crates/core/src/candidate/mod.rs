//! Candidate generation for a cycle.
//!
//! A candidate is one time-indexed remote image plus its derived local name
//! and path. The window policy derives the full per-minute list from the
//! wall clock, the manifest records every generated instant, and the builder
//! filters out candidates whose local artifact already exists.

mod builder;
mod manifest;
mod types;
mod window;

pub use builder::CandidateSetBuilder;
pub use manifest::{DateManifest, COMPACT_LOG_FILE, CANONICAL_LOG_FILE, MANIFEST_DIR};
pub use types::Candidate;
pub use window::{canonical_stamp, compact_stamp, floor_to_minute, WindowPolicy, STAMP_PLACEHOLDER};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the candidate set.
///
/// These are the fatal errors of a cycle: without the work folder and the
/// dated manifest there is no safe way to continue.
#[derive(Debug, Error)]
pub enum CandidateError {
    /// The configured work folder does not exist or is not a directory.
    #[error("work folder not found: {0}")]
    WorkFolderMissing(PathBuf),

    /// Failed to write the dated manifest logs.
    #[error("failed to append date manifest: {0}")]
    Manifest(#[source] std::io::Error),

    /// Failed to enumerate existing artifacts in the work folder.
    #[error("failed to list work folder: {0}")]
    ListFolder(#[source] std::io::Error),
}
