//! Candidate type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::window::{canonical_stamp, compact_stamp, STAMP_PLACEHOLDER};

/// One time-indexed remote image plus its derived local name and path.
///
/// Candidates are created fresh every cycle, never mutated, and discarded at
/// cycle end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The minute this candidate is indexed by.
    pub instant: DateTime<Utc>,
    /// Remote URL, derived from the base template and the compact stamp.
    pub remote_url: String,
    /// Human-readable artifact name, derived from the canonical stamp.
    pub canonical_name: String,
    /// Where the fetched artifact lands: `{work_folder}/{canonical_name}.{ext}`.
    pub local_path: PathBuf,
}

impl Candidate {
    /// Derive a candidate from an instant.
    ///
    /// `base_url` must contain the `{stamp}` placeholder, which is replaced
    /// with the compact `yyyyMMddHHmm` stamp.
    pub fn derive(
        instant: DateTime<Utc>,
        base_url: &str,
        work_folder: &Path,
        extension: &str,
    ) -> Self {
        let canonical_name = canonical_stamp(instant);
        let local_path = work_folder.join(format!("{}.{}", canonical_name, extension));

        Self {
            instant,
            remote_url: base_url.replace(STAMP_PLACEHOLDER, &compact_stamp(instant)),
            canonical_name,
            local_path,
        }
    }
}
