use thiserror::Error;

/// Failure while turning the surface into a downloadable image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot export an empty {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}
