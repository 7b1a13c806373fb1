use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::orchestrator::OrchestratorConfig;
use crate::scheduler::SchedulerConfig;

/// Base URL template used by the reference deployment.
pub const DEFAULT_BASE_URL: &str = "https://radar.example.org/composite/{stamp}.png";

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Work folder holding fetched artifacts, derived artifacts and the
    /// dated manifests. Required, no default.
    pub work_folder: PathBuf,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

/// Remote source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// URL template with a `{stamp}` placeholder for the compact timestamp.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Look-back window, in minutes / candidates per cycle.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Extension of the fetched artifacts.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            window_size: default_window_size(),
            extension: default_extension(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_window_size() -> usize {
    200
}

fn default_extension() -> String {
    "png".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Transform configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransformConfig {
    /// Extension of the derived artifact written next to the input.
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    /// Longest edge of the derived artifact, in pixels.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            output_extension: default_output_extension(),
            max_dimension: default_max_dimension(),
        }
    }
}

fn default_output_extension() -> String {
    "jpg".to_string()
}

fn default_max_dimension() -> u32 {
    1024
}
