//! Mock transformer for testing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::transformer::{TransformError, Transformer};

/// Mock implementation of the Transformer trait.
///
/// Records transformed paths and returns the input path with a `.out`
/// extension without touching the filesystem.
#[derive(Debug)]
pub struct MockTransformer {
    /// Paths transformed, in order.
    transformed: Arc<RwLock<Vec<PathBuf>>>,
    /// Substrings of paths whose transform fails.
    failing_substrings: Arc<RwLock<Vec<String>>>,
    /// Simulated transform duration in milliseconds.
    transform_duration_ms: Arc<RwLock<u64>>,
}

impl Default for MockTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransformer {
    /// Create a new mock transformer.
    pub fn new() -> Self {
        Self {
            transformed: Arc::new(RwLock::new(Vec::new())),
            failing_substrings: Arc::new(RwLock::new(Vec::new())),
            transform_duration_ms: Arc::new(RwLock::new(0)),
        }
    }

    /// Get all transformed paths, in order.
    pub async fn transformed_paths(&self) -> Vec<PathBuf> {
        self.transformed.read().await.clone()
    }

    /// Get the number of transforms performed.
    pub async fn transform_count(&self) -> usize {
        self.transformed.read().await.len()
    }

    /// Make transforms fail for any path containing `fragment`.
    pub async fn fail_path_containing(&self, fragment: impl Into<String>) {
        self.failing_substrings.write().await.push(fragment.into());
    }

    /// Set the simulated transform duration.
    pub async fn set_transform_duration(&self, duration: Duration) {
        *self.transform_duration_ms.write().await = duration.as_millis() as u64;
    }
}

#[async_trait]
impl Transformer for MockTransformer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn transform(&self, input: &Path) -> Result<PathBuf, TransformError> {
        self.transformed.write().await.push(input.to_path_buf());

        let duration_ms = *self.transform_duration_ms.read().await;
        if duration_ms > 0 {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
        }

        let input_str = input.to_string_lossy();
        let failing = self.failing_substrings.read().await;
        if failing.iter().any(|f| input_str.contains(f.as_str())) {
            return Err(TransformError::Decode {
                path: input.to_path_buf(),
                reason: "mock failure".to_string(),
            });
        }

        Ok(input.with_extension("out"))
    }
}
