//! Candidate set builder.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use crate::config::SourceConfig;

use super::manifest::DateManifest;
use super::types::Candidate;
use super::window::WindowPolicy;
use super::CandidateError;

/// Builds the reduced candidate list for a cycle.
///
/// Generates the full look-back window, records it in the dated manifest,
/// then removes every candidate whose local artifact already exists in the
/// work folder.
pub struct CandidateSetBuilder {
    policy: WindowPolicy,
    config: SourceConfig,
    work_folder: PathBuf,
    manifest: DateManifest,
}

impl CandidateSetBuilder {
    pub fn new(config: SourceConfig, work_folder: PathBuf) -> Self {
        Self {
            policy: WindowPolicy::new(config.window_size),
            manifest: DateManifest::new(&work_folder),
            config,
            work_folder,
        }
    }

    /// Generate the full window ending at `now`, without filtering.
    pub fn full_window(&self, now: DateTime<Utc>) -> Vec<Candidate> {
        self.policy
            .instants(now)
            .into_iter()
            .map(|instant| {
                Candidate::derive(
                    instant,
                    &self.config.base_url,
                    &self.work_folder,
                    &self.config.extension,
                )
            })
            .collect()
    }

    /// Build the reduced candidate list for the cycle.
    ///
    /// Appends the generated instants to the dated manifest, then filters:
    /// a candidate is dropped when the stem of any existing artifact with the
    /// expected extension is contained in the candidate's canonical name.
    /// Order is preserved (descending in time).
    pub async fn build(&self, now: DateTime<Utc>) -> Result<Vec<Candidate>, CandidateError> {
        let meta = fs::metadata(&self.work_folder).await;
        if !meta.map(|m| m.is_dir()).unwrap_or(false) {
            return Err(CandidateError::WorkFolderMissing(self.work_folder.clone()));
        }

        let candidates = self.full_window(now);
        self.manifest.append(&candidates).await?;

        let existing_stems = self.existing_artifact_stems().await?;
        let total = candidates.len();
        let reduced: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| {
                !existing_stems
                    .iter()
                    .any(|stem| c.canonical_name.contains(stem.as_str()))
            })
            .collect();

        debug!(
            total,
            reduced = reduced.len(),
            "Built candidate set for cycle"
        );

        Ok(reduced)
    }

    /// List the file-name stems of existing artifacts with the expected
    /// extension in the work folder.
    async fn existing_artifact_stems(&self) -> Result<Vec<String>, CandidateError> {
        let mut stems = Vec::new();
        let mut entries = fs::read_dir(&self.work_folder)
            .await
            .map_err(CandidateError::ListFolder)?;

        while let Some(entry) = entries.next_entry().await.map_err(CandidateError::ListFolder)? {
            let path = entry.path();
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case(&self.config.extension))
                .unwrap_or(false);

            if matches_ext {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    stems.push(stem.to_string());
                }
            }
        }

        Ok(stems)
    }
}
