use async_trait::async_trait;

use super::errors::ImageError;
use super::model::{CompressedImage, CompressionOptions, SelectedImage};

/// Service port for shrinking a picked image before upload.
///
/// Implementations must return a picture whose longer edge is at most
/// `options.max_dimension` and whose encoded size is at most
/// `options.max_size_bytes`, or an error. Heavy work must not run on the
/// async executor threads.
#[async_trait]
pub trait ImageCompressor: Send + Sync {
    async fn compress(
        &self,
        source: SelectedImage,
        options: CompressionOptions,
    ) -> Result<CompressedImage, ImageError>;
}
