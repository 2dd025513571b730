use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::image::errors::ImageError;
use crate::domain::image::model::{CompressedImage, CompressionOptions, SelectedImage};
use crate::domain::image::preview::{PreviewHandle, PreviewRegistry};
use crate::domain::image::services::ImageCompressor;
use crate::domain::logger::Logger;

/// Output of a successful [`ImageIntake::accept`].
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedImage {
    pub image: CompressedImage,
    pub preview: PreviewHandle,
    generation: u64,
}

/// Turns a picked picture into an upload payload plus a local preview.
///
/// Only the most recent selection counts: every `accept` or `invalidate`
/// starts a new generation, and results from older generations are dropped.
pub struct ImageIntake {
    compressor: Arc<dyn ImageCompressor>,
    previews: PreviewRegistry,
    logger: Arc<dyn Logger>,
    options: CompressionOptions,
    generation: AtomicU64,
}

impl ImageIntake {
    pub fn new(
        compressor: Arc<dyn ImageCompressor>,
        previews: PreviewRegistry,
        logger: Arc<dyn Logger>,
        options: CompressionOptions,
    ) -> Self {
        Self {
            compressor,
            previews,
            logger,
            options,
            generation: AtomicU64::new(0),
        }
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    pub fn options(&self) -> CompressionOptions {
        self.options
    }

    pub async fn accept(&self, file: SelectedImage) -> Result<AcceptedImage, ImageError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if file.bytes.is_empty() {
            self.logger
                .warn(&format!("Ignoring empty image file: {}", file.file_name));
            return Err(ImageError::Empty);
        }

        let original_size = file.bytes.len();
        self.logger.debug(&format!(
            "Compressing {} ({} bytes)",
            file.file_name, original_size
        ));

        let image = match self.compressor.compress(file, self.options).await {
            Ok(image) => image,
            Err(e) => {
                self.logger.error(&format!("Image compression failed: {}", e));
                return Err(e);
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            self.logger
                .debug("Discarding compressed image from a superseded selection");
            return Err(ImageError::Superseded);
        }

        let preview = self.previews.register(&image.bytes);
        self.logger.info(&format!(
            "Image compressed from {} to {} bytes ({}x{})",
            original_size,
            image.size(),
            image.width,
            image.height
        ));

        Ok(AcceptedImage {
            image,
            preview,
            generation,
        })
    }

    /// True if no newer selection or reset happened since `accepted` was produced.
    pub fn is_current(&self, accepted: &AcceptedImage) -> bool {
        self.generation.load(Ordering::SeqCst) == accepted.generation
    }

    /// Makes every in-flight or unattached result stale.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn release(&self, handle: &PreviewHandle) {
        self.previews.revoke(handle);
    }
}
