use std::env;

use anyhow::Context;
use business::domain::image::model::{
    CompressionOptions, DEFAULT_MAX_DIMENSION, DEFAULT_MAX_SIZE_BYTES,
};

/// Limits applied to pictures before upload.
#[derive(Debug, Clone, Copy)]
pub struct ImageConfig {
    pub max_size_bytes: usize,
    pub max_dimension: u32,
}

impl ImageConfig {
    /// Load image limits from environment variables
    ///
    /// Environment variables:
    /// - IMAGE_MAX_SIZE_BYTES: upper bound of the encoded file (default: 1048576)
    /// - IMAGE_MAX_DIMENSION: upper bound of the longer edge in pixels (default: 1024)
    pub fn from_env() -> anyhow::Result<Self> {
        let max_size_bytes = match env::var("IMAGE_MAX_SIZE_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("IMAGE_MAX_SIZE_BYTES is not a number: {}", raw))?,
            Err(_) => DEFAULT_MAX_SIZE_BYTES,
        };
        let max_dimension = match env::var("IMAGE_MAX_DIMENSION") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("IMAGE_MAX_DIMENSION is not a number: {}", raw))?,
            Err(_) => DEFAULT_MAX_DIMENSION,
        };

        Ok(Self {
            max_size_bytes,
            max_dimension,
        })
    }

    pub fn compression_options(&self) -> CompressionOptions {
        CompressionOptions {
            max_size_bytes: self.max_size_bytes,
            max_dimension: self.max_dimension,
        }
    }
}
