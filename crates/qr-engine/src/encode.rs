//! PNG serialization of the output image.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::EngineError;

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// An encoded image payload ready to be sent to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn content_type(&self) -> &'static str {
        PNG_CONTENT_TYPE
    }

    /// Exact payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode `img` as PNG.
pub fn encode_png(img: &DynamicImage) -> Result<EncodedImage, EngineError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(EngineError::Serialize)?;
    debug!(
        width = img.width(),
        height = img.height(),
        len = bytes.len(),
        "Encoded PNG"
    );
    Ok(EncodedImage { bytes })
}
