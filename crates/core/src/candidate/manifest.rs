//! Dated manifest logs.
//!
//! Every cycle appends the generated instants, in both representations, to
//! two plain-text logs under a `Dates` subfolder of the work folder. The
//! logs are append-only: each run adds lines, it never overwrites.

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use super::window::{canonical_stamp, compact_stamp};
use super::{Candidate, CandidateError};

/// Subfolder of the work folder holding the manifest logs.
pub const MANIFEST_DIR: &str = "Dates";
/// Log of compact `yyyyMMddHHmm` stamps.
pub const COMPACT_LOG_FILE: &str = "dates.txt";
/// Log of canonical `yyyy_MM_dd_HH_mm` stamps.
pub const CANONICAL_LOG_FILE: &str = "datesTime.txt";

/// Append-only writer for the dated manifest logs.
pub struct DateManifest {
    dir: PathBuf,
}

impl DateManifest {
    /// Create a manifest rooted at the work folder.
    pub fn new(work_folder: &Path) -> Self {
        Self {
            dir: work_folder.join(MANIFEST_DIR),
        }
    }

    /// Append one line per candidate to each log, creating the `Dates`
    /// subfolder if absent. IO failure here is fatal to the cycle.
    pub async fn append(&self, candidates: &[Candidate]) -> Result<(), CandidateError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(CandidateError::Manifest)?;

        let mut compact_lines = String::new();
        let mut canonical_lines = String::new();
        for candidate in candidates {
            compact_lines.push_str(&compact_stamp(candidate.instant));
            compact_lines.push('\n');
            canonical_lines.push_str(&canonical_stamp(candidate.instant));
            canonical_lines.push('\n');
        }

        self.append_file(COMPACT_LOG_FILE, &compact_lines).await?;
        self.append_file(CANONICAL_LOG_FILE, &canonical_lines).await?;

        Ok(())
    }

    async fn append_file(&self, name: &str, contents: &str) -> Result<(), CandidateError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(name))
            .await
            .map_err(CandidateError::Manifest)?;

        file.write_all(contents.as_bytes())
            .await
            .map_err(CandidateError::Manifest)?;
        file.flush().await.map_err(CandidateError::Manifest)?;

        Ok(())
    }
}
