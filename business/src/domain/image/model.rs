/// Default upper bound for an uploaded picture, in bytes (1 MiB).
pub const DEFAULT_MAX_SIZE_BYTES: usize = 1024 * 1024;
/// Default upper bound for the longer edge, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;

/// Raw picture as picked by the user, before any processing.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Picture ready to be sent as the `image` multipart part.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CompressedImage {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOptions {
    pub max_size_bytes: usize,
    pub max_dimension: u32,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}
