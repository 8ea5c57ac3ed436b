//! QR code image pipeline.
//!
//! Validates raw request parameters, renders a QR symbol at a fixed
//! resolution, optionally composites a logo into its center, and resamples
//! the result to the requested output size before PNG encoding.

pub mod compose;
pub mod encode;
pub mod generator;
pub mod logo;
pub mod qr;
pub mod request;
pub mod resize;

// Re-exports for convenience
pub use encode::{EncodedImage, PNG_CONTENT_TYPE, encode_png};
pub use generator::QrGenerator;
pub use logo::LogoAsset;
pub use request::GenerationRequest;

/// Side length of the intermediate QR canvas in pixels.
pub const QR_CANVAS_SIZE: u32 = 500;

/// Side length of the logo overlay in pixels.
pub const LOGO_SIZE: u32 = 150;

/// Maximum length of the `data` parameter before percent-decoding.
pub const DATA_MAX_LENGTH: usize = 256;

pub const IMAGE_MIN_SIZE: u64 = 100;
pub const IMAGE_MAX_SIZE: u64 = 1000;
pub const DEFAULT_IMAGE_SIZE: u32 = 250;

/// Blank margin around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Client-caused request problems. The display form is the machine-readable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("data.missing")]
    DataMissing,

    #[error("data.too_long")]
    DataTooLong,

    #[error("size.too_big")]
    SizeTooBig,

    #[error("size.too_small")]
    SizeTooSmall,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataMissing => "data.missing",
            Self::DataTooLong => "data.too_long",
            Self::SizeTooBig => "size.too_big",
            Self::SizeTooSmall => "size.too_small",
        }
    }
}

/// Unified error type for the qr-engine crate.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Percent-decoding failed: {0}")]
    Decode(String),

    #[error("QR encode error: {0}")]
    Render(#[from] qrcode::types::QrError),

    #[error("Logo decode error: {0}")]
    LogoDecode(#[source] image::ImageError),

    #[error("PNG encode error: {0}")]
    Serialize(#[source] image::ImageError),
}

impl EngineError {
    /// Whether the error was caused by the client's parameters.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
