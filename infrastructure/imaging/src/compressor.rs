use std::path::Path;

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use business::domain::image::errors::ImageError;
use business::domain::image::model::{CompressedImage, CompressionOptions, SelectedImage};
use business::domain::image::services::ImageCompressor;

const JPEG_CONTENT_TYPE: &str = "image/jpeg";
/// Tried in order for each rendition until one fits the size budget.
const QUALITY_STEPS: [u8; 6] = [85, 75, 65, 55, 45, 35];
/// Below this longer edge we stop shrinking and give up.
const MIN_DIMENSION: u32 = 64;

/// Re-encodes pictures as JPEG within the configured size and dimension limits.
///
/// Work runs on the blocking thread pool.
pub struct ImageCompressorJpeg;

#[async_trait]
impl ImageCompressor for ImageCompressorJpeg {
    async fn compress(
        &self,
        source: SelectedImage,
        options: CompressionOptions,
    ) -> Result<CompressedImage, ImageError> {
        tokio::task::spawn_blocking(move || compress_blocking(&source, options))
            .await
            .map_err(|_| ImageError::EncodeFailed)?
    }
}

/// Decodes, fits within `max_dimension`, then lowers quality and size until
/// the JPEG is at most `max_size_bytes`.
pub fn compress_blocking(
    source: &SelectedImage,
    options: CompressionOptions,
) -> Result<CompressedImage, ImageError> {
    let decoded = image::load_from_memory(&source.bytes).map_err(|_| ImageError::DecodeFailed)?;
    let mut current = fit_within(decoded, options.max_dimension.max(1)).to_rgb8();

    loop {
        let (width, height) = current.dimensions();

        for quality in QUALITY_STEPS {
            let bytes = encode_jpeg(&current, quality)?;
            if bytes.len() <= options.max_size_bytes {
                return Ok(CompressedImage {
                    file_name: jpeg_file_name(&source.file_name),
                    content_type: JPEG_CONTENT_TYPE.to_string(),
                    bytes,
                    width,
                    height,
                });
            }
        }

        if width.max(height) <= MIN_DIMENSION {
            return Err(ImageError::TooLarge);
        }
        current = image::imageops::resize(
            &current,
            (width * 3 / 4).max(1),
            (height * 3 / 4).max(1),
            FilterType::Triangle,
        );
    }
}

fn fit_within(image: DynamicImage, max_dimension: u32) -> DynamicImage {
    if image.width().max(image.height()) > max_dimension {
        // Keeps the aspect ratio; the longer edge becomes max_dimension.
        image.resize(max_dimension, max_dimension, FilterType::Triangle)
    } else {
        image
    }
}

fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .encode_image(image)
        .map_err(|_| ImageError::EncodeFailed)?;
    Ok(bytes)
}

fn jpeg_file_name(original: &str) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("image");
    format!("{}.jpg", stem)
}
