//! Local image transform capability.

mod error;
mod image_transformer;
mod traits;

pub use error::TransformError;
pub use image_transformer::ImageTransformer;
pub use traits::Transformer;
