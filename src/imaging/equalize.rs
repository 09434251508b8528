//! Histogram equalization.
//!
//! Color images are equalized on the luma plane only; grayscale images are
//! equalized directly. The histogram and CDF live only for one call.

use super::color::YCbCrPlanes;
use super::params::Normalization;
use image::{DynamicImage, GrayImage};

/// Count occurrences of every intensity value.
pub fn histogram(values: &[u8]) -> [u64; 256] {
    let mut bins = [0u64; 256];
    for &v in values {
        bins[v as usize] += 1;
    }
    bins
}

/// Build the per-intensity remap table from a histogram.
///
/// The cumulative histogram is scaled by `target / cdf_max`, where `target` is
/// either the tallest bucket or 255 (see [`Normalization`]). Results truncate
/// toward zero and keep only the low 8 bits, so peak-bucket values above 255
/// wrap around (1000 becomes 232).
pub fn lookup_table(hist: &[u64; 256], normalization: Normalization) -> [u8; 256] {
    let mut cdf = [0u64; 256];
    let mut running = 0u64;
    for (slot, &count) in cdf.iter_mut().zip(hist.iter()) {
        running += count;
        *slot = running;
    }

    let cdf_max = running;
    if cdf_max == 0 {
        return std::array::from_fn(|i| i as u8);
    }

    let target = match normalization {
        Normalization::PeakBucket => hist.iter().copied().max().unwrap_or(0) as f64,
        Normalization::Standard => 255.0,
    };

    std::array::from_fn(|i| ((cdf[i] as f64 * target / cdf_max as f64) as u64 % 256) as u8)
}

fn equalize_plane(values: &mut [u8], normalization: Normalization) {
    let table = lookup_table(&histogram(values), normalization);
    for v in values.iter_mut() {
        *v = table[*v as usize];
    }
}

/// Equalize a grayscale image.
pub fn equalize_gray(img: &GrayImage, normalization: Normalization) -> GrayImage {
    let mut out = img.clone();
    equalize_plane(&mut out, normalization);
    out
}

/// Equalize an image, dispatching on its channel layout.
///
/// Single-channel layouts (with or without alpha, any depth) become 8-bit
/// grayscale; everything else becomes 8-bit RGB with only the luma equalized.
pub fn equalize(img: &DynamicImage, normalization: Normalization) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(gray) => {
            DynamicImage::ImageLuma8(equalize_gray(gray, normalization))
        }
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => {
            DynamicImage::ImageLuma8(equalize_gray(&img.to_luma8(), normalization))
        }
        _ => {
            let mut planes = YCbCrPlanes::from_rgb(&img.to_rgb8());
            equalize_plane(&mut planes.y, normalization);
            DynamicImage::ImageRgb8(planes.to_rgb())
        }
    }
}
