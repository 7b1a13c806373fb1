//! Observable cycle state types.

use serde::{Deserialize, Serialize};

/// State of the orchestration cycle. Exactly one value holds at any instant.
///
/// Transitions are monotonic within a cycle except the
/// `ImageProcessing`/`ImageProcessed` pair, which repeats once per
/// transformed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleState {
    Waiting,
    Initializing,
    Downloading,
    DownloadCompleted,
    ImageProcessing,
    ImageProcessed,
}

impl CycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleState::Waiting => "waiting",
            CycleState::Initializing => "initializing",
            CycleState::Downloading => "downloading",
            CycleState::DownloadCompleted => "download_completed",
            CycleState::ImageProcessing => "image_processing",
            CycleState::ImageProcessed => "image_processed",
        }
    }
}

impl std::fmt::Display for CycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One delivered change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// The cycle state changed.
    State(CycleState),
    /// The active phase's progress changed (0 to 100).
    Progress(u8),
}
