//! The optional brand logo composited into every generated code.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::{EngineError, LOGO_SIZE};

/// A logo pre-scaled to `LOGO_SIZE` square, immutable once built.
#[derive(Debug, Clone)]
pub struct LogoAsset {
    image: RgbaImage,
}

impl LogoAsset {
    /// Decode an encoded image (PNG, JPEG, ...) and scale it to the logo size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let img = image::load_from_memory(bytes).map_err(EngineError::LogoDecode)?;
        Ok(Self::from_image(&img))
    }

    /// Scale an already-decoded image to the logo size with Lanczos3.
    ///
    /// Non-square sources are stretched; the logo is always square.
    pub fn from_image(img: &DynamicImage) -> Self {
        if img.width() == LOGO_SIZE && img.height() == LOGO_SIZE {
            debug!(size = LOGO_SIZE, "Logo already at target size, skipping resize");
            return Self {
                image: img.to_rgba8(),
            };
        }

        debug!(
            orig_w = img.width(),
            orig_h = img.height(),
            size = LOGO_SIZE,
            "Scaling logo"
        );
        let image = img
            .resize_exact(LOGO_SIZE, LOGO_SIZE, FilterType::Lanczos3)
            .to_rgba8();
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
