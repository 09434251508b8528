//! Pencil-sketch effect: grayscale edge map with boosted contrast and brightness.

use super::color::grayscale_601;
use super::filters::convolve;
use super::params::Filter;
use image::{DynamicImage, GrayImage};

/// Contrast boost applied to the edge map.
pub const SKETCH_CONTRAST: f32 = 2.0;
/// Brightness boost applied after the contrast boost.
pub const SKETCH_BRIGHTNESS: f32 = 2.0;

/// Blend every pixel away from (factor > 1) or toward (factor < 1) a reference level.
fn blend(img: &GrayImage, reference: f32, factor: f32) -> GrayImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let v = reference + factor * (px.0[0] as f32 - reference);
        px.0[0] = v.clamp(0.0, 255.0) as u8;
    }
    out
}

/// Mean gray level, rounded to the nearest integer.
fn mean_level(img: &GrayImage) -> f32 {
    let count = img.as_raw().len();
    if count == 0 {
        return 0.0;
    }
    let total: u64 = img.as_raw().iter().map(|&v| v as u64).sum();
    (total as f64 / count as f64 + 0.5).floor() as f32
}

/// Scale contrast around the image's mean gray level. 1.0 leaves it unchanged.
pub fn enhance_contrast(img: &GrayImage, factor: f32) -> GrayImage {
    blend(img, mean_level(img), factor)
}

/// Scale brightness toward black (< 1.0) or away from it (> 1.0).
pub fn enhance_brightness(img: &GrayImage, factor: f32) -> GrayImage {
    blend(img, 0.0, factor)
}

/// Build the sketch: grayscale, find edges, contrast ×2, brightness ×2.
pub fn sketch_image(img: &DynamicImage) -> GrayImage {
    let gray = match img {
        DynamicImage::ImageLuma8(g) => g.clone(),
        other => grayscale_601(&other.to_rgb8()),
    };
    let edges = convolve(&gray, Filter::FindEdges.kernel(), 1);
    let boosted = enhance_contrast(&edges, SKETCH_CONTRAST);
    enhance_brightness(&boosted, SKETCH_BRIGHTNESS)
}
