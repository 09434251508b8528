//! Output filename convention.
//!
//! Every written result is named `<prefix>_<base name>` in the working
//! directory. Names are deterministic and never de-duplicated: running the
//! same operation on the same input overwrites the previous result.
//!
//! - `resized_youtube_cat.jpg`
//! - `contrast-adjusted_cat.jpg`
//! - `sketch_cat.jpg`
//!
//! The base name comes from the last URL path segment or the local file
//! name. When it carries no extension the `image` crate can write, `.png` is
//! appended so the result is always saveable.

use crate::imaging::Platform;
use image::ImageFormat;
use std::path::Path;

/// Fallback base name when a URL or path has no usable last segment.
pub const DEFAULT_BASE_NAME: &str = "image.png";

/// Which operation produced a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Resized(Platform),
    ContrastAdjusted,
    Sketch,
}

impl OutputKind {
    pub fn prefix(self) -> String {
        match self {
            OutputKind::Resized(platform) => format!("resized_{}", platform.name()),
            OutputKind::ContrastAdjusted => "contrast-adjusted".to_string(),
            OutputKind::Sketch => "sketch".to_string(),
        }
    }
}

/// Build the output filename for `kind` applied to `base_name`.
pub fn output_filename(kind: OutputKind, base_name: &str) -> String {
    format!("{}_{}", kind.prefix(), base_name)
}

fn is_writable_extension(name: &str) -> bool {
    ImageFormat::from_path(name)
        .map(|format| format.writing_enabled())
        .unwrap_or(false)
}

/// Turn a raw last segment into a safe, saveable base name.
///
/// Path separators are not expected here (callers pass a single segment);
/// empty input falls back to [`DEFAULT_BASE_NAME`].
pub fn sanitize_base_name(segment: &str) -> String {
    let trimmed = segment.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return DEFAULT_BASE_NAME.to_string();
    }
    if is_writable_extension(trimmed) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.png")
    }
}

/// Base name of a local file path.
pub fn base_name_for_path(path: &Path) -> String {
    path.file_name()
        .map(|n| sanitize_base_name(&n.to_string_lossy()))
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string())
}

/// Base name of a URL: its last non-empty path segment, query and fragment ignored.
pub fn base_name_for_url(url: &reqwest::Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .map(sanitize_base_name)
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> reqwest::Url {
        reqwest::Url::parse(s).unwrap()
    }

    #[test]
    fn resized_prefix_includes_platform() {
        assert_eq!(
            output_filename(OutputKind::Resized(Platform::Youtube), "cat.jpg"),
            "resized_youtube_cat.jpg"
        );
    }

    #[test]
    fn contrast_and_sketch_prefixes() {
        assert_eq!(
            output_filename(OutputKind::ContrastAdjusted, "cat.jpg"),
            "contrast-adjusted_cat.jpg"
        );
        assert_eq!(output_filename(OutputKind::Sketch, "cat.jpg"), "sketch_cat.jpg");
    }

    #[test]
    fn url_last_segment_is_base_name() {
        assert_eq!(base_name_for_url(&url("https://example.com/a/b/dog.png")), "dog.png");
    }

    #[test]
    fn url_query_is_ignored() {
        assert_eq!(
            base_name_for_url(&url("https://example.com/pics/dog.jpg?w=800&h=600")),
            "dog.jpg"
        );
    }

    #[test]
    fn url_without_extension_gets_png() {
        assert_eq!(
            base_name_for_url(&url("https://images.example.com/photo-1529626455594")),
            "photo-1529626455594.png"
        );
    }

    #[test]
    fn url_with_trailing_slash_falls_back() {
        assert_eq!(base_name_for_url(&url("https://example.com/")), DEFAULT_BASE_NAME);
        assert_eq!(base_name_for_url(&url("https://example.com/dir/")), DEFAULT_BASE_NAME);
    }

    #[test]
    fn path_file_name_is_base_name() {
        assert_eq!(base_name_for_path(Path::new("/tmp/shots/beach.jpeg")), "beach.jpeg");
    }

    #[test]
    fn unknown_extension_gets_png() {
        assert_eq!(sanitize_base_name("notes.txt"), "notes.txt.png");
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(sanitize_base_name("LOUD.JPG"), "LOUD.JPG");
    }
}
