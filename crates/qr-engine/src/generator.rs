//! The full render → composite → resize pipeline.

use image::DynamicImage;
use tracing::debug;

use crate::compose::composite_logo;
use crate::encode::{EncodedImage, encode_png};
use crate::logo::LogoAsset;
use crate::qr::render_qr;
use crate::request::GenerationRequest;
use crate::resize::resize_square;
use crate::EngineError;

/// Generates QR code images, optionally branded with a logo.
///
/// Holds no per-request state; share it behind an `Arc` and call it from any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct QrGenerator {
    logo: Option<LogoAsset>,
}

impl QrGenerator {
    pub fn new(logo: Option<LogoAsset>) -> Self {
        Self { logo }
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    /// Produce the output raster for `req`.
    pub fn generate(&self, req: &GenerationRequest) -> Result<DynamicImage, EngineError> {
        let qr = render_qr(&req.text)?;

        let canvas = match &self.logo {
            Some(logo) => composite_logo(&qr, logo),
            None => qr,
        };

        debug!(
            output_size = req.output_size,
            logo = self.has_logo(),
            "Generated QR canvas"
        );
        Ok(resize_square(&canvas, req.output_size))
    }

    /// Produce the output raster for `req` encoded as PNG.
    pub fn generate_png(&self, req: &GenerationRequest) -> Result<EncodedImage, EngineError> {
        let img = self.generate(req)?;
        encode_png(&img)
    }
}
