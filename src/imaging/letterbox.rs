//! Fit an image onto a fixed canvas with white bars.

use super::calculations::{calculate_centered_offset, calculate_fit_dimensions};
use super::params::Platform;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

/// Canvas background.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Scale `img` to fit `canvas` (Lanczos3) and center it on a white background.
pub fn letterbox(img: &DynamicImage, canvas: (u32, u32)) -> RgbImage {
    let (fit_w, fit_h) = calculate_fit_dimensions((img.width(), img.height()), canvas);
    let scaled = img
        .resize_exact(fit_w, fit_h, FilterType::Lanczos3)
        .to_rgb8();

    let (off_x, off_y) = calculate_centered_offset(canvas, (fit_w, fit_h));
    let mut background = RgbImage::from_pixel(canvas.0, canvas.1, BACKGROUND);
    imageops::replace(&mut background, &scaled, off_x as i64, off_y as i64);

    tracing::debug!(
        from_w = img.width(),
        from_h = img.height(),
        fit_w,
        fit_h,
        off_x,
        off_y,
        "Letterboxed image"
    );
    background
}

/// Letterbox onto the canvas recommended for `platform`.
pub fn letterbox_for(img: &DynamicImage, platform: Platform) -> RgbImage {
    letterbox(img, platform.dimensions())
}
