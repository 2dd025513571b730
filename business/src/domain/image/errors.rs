#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageError {
    #[error("image.empty")]
    Empty,
    #[error("image.decode_failed")]
    DecodeFailed,
    #[error("image.encode_failed")]
    EncodeFailed,
    /// Even the smallest allowed rendition exceeds the size budget.
    #[error("image.too_large")]
    TooLarge,
    /// A newer selection or a form reset happened while this one was compressing.
    #[error("image.superseded")]
    Superseded,
    #[error("image.intake_unavailable")]
    IntakeUnavailable,
}
