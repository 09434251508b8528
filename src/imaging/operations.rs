//! High-level image operations.
//!
//! These functions combine parameter parsing, the pure transforms, output
//! naming, and the file write. Every operation validates its parameters
//! before touching the disk, so a rejected request never leaves a file behind.

use super::equalize::equalize;
use super::error::ImagingError;
use super::filters::apply_choice;
use super::letterbox::letterbox_for;
use super::params::{FilterChoice, Normalization, Platform};
use super::sketch::sketch_image;
use crate::naming::{OutputKind, output_filename};
use crate::source::SourceImage;
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ImagingError>;

/// A transformed image together with where it was written.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub image: DynamicImage,
    pub filename: String,
    pub path: PathBuf,
}

/// Re-layout `image` when the encoder picked from `path` cannot take its
/// color type. GIF only encodes RGB(A), so grayscale results are expanded.
fn encodable_layout(image: &DynamicImage, path: &Path) -> Option<DynamicImage> {
    match (ImageFormat::from_path(path).ok()?, image) {
        (ImageFormat::Gif, DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_)) => {
            Some(DynamicImage::ImageRgb8(image.to_rgb8()))
        }
        (ImageFormat::Gif, DynamicImage::ImageLumaA8(_) | DynamicImage::ImageLumaA16(_)) => {
            Some(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        _ => None,
    }
}

fn save(image: DynamicImage, filename: String, out_dir: &Path) -> Result<Rendered> {
    let path = out_dir.join(&filename);
    let converted = encodable_layout(&image, &path);
    converted
        .as_ref()
        .unwrap_or(&image)
        .save(&path)
        .map_err(|source| ImagingError::Save {
            path: path.display().to_string(),
            source,
        })
        .inspect_err(|e| tracing::error!(error = %e, "Could not write result"))?;
    tracing::info!(path = %path.display(), "Saved image");
    Ok(Rendered {
        image,
        filename,
        path,
    })
}

/// Resize for a social network and write `resized_<platform>_<name>`.
pub fn resize_for_platform(
    source: &SourceImage,
    platform: &str,
    out_dir: &Path,
) -> Result<Rendered> {
    let platform = platform
        .parse::<Platform>()
        .inspect_err(|e| tracing::error!(error = %e, "Resize rejected"))?;
    let canvas = letterbox_for(&source.image, platform);
    let filename = output_filename(OutputKind::Resized(platform), &source.name);
    save(DynamicImage::ImageRgb8(canvas), filename, out_dir)
}

/// Equalize the histogram and write `contrast-adjusted_<name>`.
pub fn adjust_contrast(
    source: &SourceImage,
    normalization: Normalization,
    out_dir: &Path,
) -> Result<Rendered> {
    let adjusted = equalize(&source.image, normalization);
    let filename = output_filename(OutputKind::ContrastAdjusted, &source.name);
    save(adjusted, filename, out_dir)
}

/// Apply a menu filter code (1-10). In-memory only; nothing is written.
pub fn apply_filter(image: &DynamicImage, code: i64) -> Result<DynamicImage> {
    let choice = FilterChoice::from_code(code)
        .inspect_err(|e| tracing::error!(error = %e, "Filter rejected"))?;
    tracing::debug!(filter = choice.label(), "Applying filter");
    Ok(apply_choice(image, choice))
}

/// Create a pencil sketch and write `sketch_<name>`.
///
/// `has_person` is supplied by the caller; no detection is performed. When it
/// is false the request is rejected.
pub fn sketch(source: &SourceImage, has_person: bool, out_dir: &Path) -> Result<Rendered> {
    if !has_person {
        let err = ImagingError::NoPerson;
        tracing::error!(error = %err, "Sketch rejected");
        return Err(err);
    }
    let drawn = sketch_image(&source.image);
    let filename = output_filename(OutputKind::Sketch, &source.name);
    save(DynamicImage::ImageLuma8(drawn), filename, out_dir)
}
