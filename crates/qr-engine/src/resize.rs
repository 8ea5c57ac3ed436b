//! Output resampling.
//!
//! Uses Lanczos3 filtering for both upscaling and downscaling. The filter is
//! deterministic, so equal inputs always produce equal pixels.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize a square canvas to `size × size`.
///
/// Returns the original image unchanged if it already has that size.
pub fn resize_square(img: &DynamicImage, size: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w == size && orig_h == size {
        debug!(size, "Image already at target size, skipping resize");
        return img.clone();
    }

    debug!(orig_w, orig_h, size, "Resizing image");
    img.resize_exact(size, size, FilterType::Lanczos3)
}
