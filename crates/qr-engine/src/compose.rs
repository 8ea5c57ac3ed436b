//! Logo compositing onto the QR canvas.
//!
//! The overlay region depends only on `QR_CANVAS_SIZE` and `LOGO_SIZE`, so it
//! is the same square for every request regardless of the output size.

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use crate::logo::LogoAsset;
use crate::{LOGO_SIZE, QR_CANVAS_SIZE};

/// Top-left corner of the logo on the canvas, on both axes.
pub const LOGO_OFFSET: u32 = QR_CANVAS_SIZE / 2 - LOGO_SIZE / 2;

/// The logo square as `(x0, y0, x1, y1)`, end-exclusive.
pub const fn logo_region() -> (u32, u32, u32, u32) {
    (
        LOGO_OFFSET,
        LOGO_OFFSET,
        LOGO_OFFSET + LOGO_SIZE,
        LOGO_OFFSET + LOGO_SIZE,
    )
}

/// Composite `logo` over the center of `qr` on a fresh RGBA raster.
///
/// `qr` is copied in full first; only the logo square is blended.
pub fn composite_logo(qr: &DynamicImage, logo: &LogoAsset) -> DynamicImage {
    let mut canvas = qr.to_rgba8();
    debug!(
        canvas_w = canvas.width(),
        canvas_h = canvas.height(),
        offset = LOGO_OFFSET,
        "Compositing logo"
    );
    overlay(&mut canvas, logo.image(), LOGO_OFFSET, LOGO_OFFSET);
    DynamicImage::ImageRgba8(canvas)
}

/// Source-over blend `top` onto `base` at the given position.
///
/// Pixels falling outside `base` are skipped.
fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < base.width() && target_y < base.height() {
            let bg = base.get_pixel_mut(target_x, target_y);
            *bg = blend_pixel(bg, pixel);
        }
    }
}

/// Porter-Duff source-over on straight-alpha pixels, in integer math.
///
/// An opaque background always yields an opaque result.
fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>) -> Rgba<u8> {
    let fg_a = u32::from(fg[3]);
    match fg_a {
        0 => return *bg,
        255 => return *fg,
        _ => {}
    }

    // Both weights are scaled by 255 * 255.
    let fg_w = fg_a * 255;
    let bg_w = u32::from(bg[3]) * (255 - fg_a);
    let out_w = fg_w + bg_w;

    let channel = |i: usize| {
        let sum = u32::from(fg[i]) * fg_w + u32::from(bg[i]) * bg_w;
        ((sum + out_w / 2) / out_w) as u8
    };
    Rgba([channel(0), channel(1), channel(2), ((out_w + 127) / 255) as u8])
}
