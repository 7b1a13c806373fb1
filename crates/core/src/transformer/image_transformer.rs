//! Image transformer implementation.

use async_trait::async_trait;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::TransformConfig;

use super::{TransformError, Transformer};

/// Default transform capability: decode the fetched image, clamp it to a
/// bounded size and re-encode it as the derived artifact next to the input.
pub struct ImageTransformer {
    config: TransformConfig,
}

impl ImageTransformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    fn run_blocking(
        input: PathBuf,
        output_extension: String,
        max_dimension: u32,
    ) -> Result<PathBuf, TransformError> {
        let img = image::open(&input).map_err(|e| TransformError::Decode {
            path: input.clone(),
            reason: e.to_string(),
        })?;

        let img = if img.width() > max_dimension || img.height() > max_dimension {
            img.resize(max_dimension, max_dimension, FilterType::Lanczos3)
        } else {
            img
        };

        let output = input.with_extension(&output_extension);
        // JPEG has no alpha channel; flatten unconditionally
        let img = image::DynamicImage::ImageRgb8(img.to_rgb8());
        img.save(&output).map_err(|e| TransformError::Encode {
            path: output.clone(),
            reason: e.to_string(),
        })?;

        Ok(output)
    }
}

#[async_trait]
impl Transformer for ImageTransformer {
    fn name(&self) -> &str {
        "image"
    }

    async fn transform(&self, input: &Path) -> Result<PathBuf, TransformError> {
        if !tokio::fs::try_exists(input).await.unwrap_or(false) {
            return Err(TransformError::InputNotFound(input.to_path_buf()));
        }

        debug!(input = %input.display(), "Transforming radar image");

        let input = input.to_path_buf();
        let output_extension = self.config.output_extension.clone();
        let max_dimension = self.config.max_dimension;

        tokio::task::spawn_blocking(move || {
            Self::run_blocking(input, output_extension, max_dimension)
        })
        .await
        .map_err(|e| TransformError::TaskFailed(e.to_string()))?
    }
}
