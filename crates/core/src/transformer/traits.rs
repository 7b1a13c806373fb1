//! Trait definition for the transform capability.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::TransformError;

/// Transforms a fetched artifact into its derived local form.
///
/// The core does not specify encoding details; implementations decide what
/// the derived artifact looks like and where it lands.
#[async_trait]
pub trait Transformer: Send + Sync {
    /// Returns the name of this transformer implementation.
    fn name(&self) -> &str;

    /// Transform the artifact at `input`, returning the derived artifact's
    /// path.
    async fn transform(&self, input: &Path) -> Result<PathBuf, TransformError>;
}
