//! QR symbol rendering onto the fixed-size canvas.

use image::{DynamicImage, GrayImage, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::{EngineError, QR_CANVAS_SIZE, QUIET_ZONE_MODULES};

/// Render `text` as a QR symbol on a white `QR_CANVAS_SIZE` square canvas.
///
/// Uses the highest error-correction level so the symbol stays decodable
/// with the logo covering its center. The symbol, including its quiet zone,
/// is scaled by a whole number of pixels per module and centered.
pub fn render_qr(text: &str) -> Result<DynamicImage, EngineError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let symbol_modules = module_count + 2 * QUIET_ZONE_MODULES;
    let scale = (QR_CANVAS_SIZE / symbol_modules).max(1);
    let canvas_size = QR_CANVAS_SIZE.max(symbol_modules * scale);
    let offset = (canvas_size - symbol_modules * scale) / 2 + QUIET_ZONE_MODULES * scale;

    debug!(
        version = ?code.version(),
        module_count,
        scale,
        offset,
        "Rendering QR symbol"
    );

    let mut img = GrayImage::from_pixel(canvas_size, canvas_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        if *color == qrcode::Color::Dark {
            for dx in 0..scale {
                for dy in 0..scale {
                    img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, Luma([0u8]));
                }
            }
        }
    }

    Ok(DynamicImage::ImageLuma8(img))
}
