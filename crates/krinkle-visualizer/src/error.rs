//! Rendering errors.

use thiserror::Error;

/// Errors raised while producing raster output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// tiny-skia refused the requested size (zero or too large)
    #[error("Cannot allocate a {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },

    /// Image encoding or file write failed
    #[error("Image export failed: {0}")]
    Image(#[from] image::ImageError),
}
