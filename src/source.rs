//! Image sources: remote URLs and local files.
//!
//! The network sits behind the [`Fetcher`] trait so the rest of the crate
//! (and its tests) never needs a live connection. [`HttpFetcher`] is the
//! production implementation: one blocking GET, the whole body, no retries.

use crate::config::DownloadConfig;
use crate::naming::{base_name_for_path, base_name_for_url};
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to download the image from {url}: {reason}")]
    Download { url: String, reason: String },
    #[error("The image path does not exist: {0}")]
    NotFound(PathBuf),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// A decoded image plus the base name used for its output files.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub image: DynamicImage,
    pub name: String,
}

/// Where an image comes from, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Url(reqwest::Url),
    Path(PathBuf),
}

impl Location {
    /// `http://` and `https://` inputs are URLs; everything else is a path.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match reqwest::Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Location::Url(url),
            _ => Location::Path(PathBuf::from(trimmed)),
        }
    }
}

/// Retrieves the raw bytes behind a URL.
pub trait Fetcher {
    fn fetch_bytes(&self, url: &reqwest::Url) -> Result<Vec<u8>, SourceError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch_bytes(&self, url: &reqwest::Url) -> Result<Vec<u8>, SourceError> {
        (**self).fetch_bytes(url)
    }
}

/// Blocking HTTP fetcher backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &DownloadConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_bytes(&self, url: &reqwest::Url) -> Result<Vec<u8>, SourceError> {
        let download_error = |e: reqwest::Error| SourceError::Download {
            url: url.to_string(),
            reason: e.to_string(),
        };
        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(download_error)?;
        let bytes = response.bytes().map_err(download_error)?;
        Ok(bytes.to_vec())
    }
}

/// Download and decode an image.
///
/// Network failures and undecodable bodies are both reported as
/// [`SourceError::Download`], after being logged.
pub fn fetch(fetcher: &impl Fetcher, url: &reqwest::Url) -> Result<SourceImage, SourceError> {
    tracing::info!(%url, "Downloading image");
    let result = fetcher.fetch_bytes(url).and_then(|bytes| {
        image::load_from_memory(&bytes).map_err(|e| SourceError::Download {
            url: url.to_string(),
            reason: format!("not a decodable image ({e})"),
        })
    });

    match result {
        Ok(image) => {
            tracing::debug!(width = image.width(), height = image.height(), "Image decoded");
            Ok(SourceImage {
                image,
                name: base_name_for_url(url),
            })
        }
        Err(e) => {
            tracing::error!(%url, error = %e, "Download failed");
            Err(e)
        }
    }
}

/// Load and decode an image from disk.
pub fn load(path: &Path) -> Result<SourceImage, SourceError> {
    if !path.exists() {
        tracing::error!(path = %path.display(), "Image path does not exist");
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    let decode_error = |reason: String| SourceError::Decode {
        path: path.to_path_buf(),
        reason,
    };
    let image = ImageReader::open(path)
        .map_err(|e| decode_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))
        .inspect_err(|e| tracing::error!(error = %e, "Decode failed"))?;
    tracing::debug!(width = image.width(), height = image.height(), "Image loaded");
    Ok(SourceImage {
        image,
        name: base_name_for_path(path),
    })
}

/// Open whatever the user typed: fetch URLs, load everything else from disk.
pub fn open(fetcher: &impl Fetcher, input: &str) -> Result<SourceImage, SourceError> {
    match Location::parse(input) {
        Location::Url(url) => fetch(fetcher, &url),
        Location::Path(path) => load(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{MockFetcher, gradient_rgb, png_bytes};
    use tempfile::TempDir;

    #[test]
    fn location_detects_http_urls() {
        assert!(matches!(
            Location::parse("https://example.com/a.png"),
            Location::Url(_)
        ));
        assert!(matches!(
            Location::parse("  http://example.com/a.png  "),
            Location::Url(_)
        ));
    }

    #[test]
    fn location_treats_other_input_as_path() {
        assert_eq!(
            Location::parse("photos/cat.jpg"),
            Location::Path(PathBuf::from("photos/cat.jpg"))
        );
        assert!(matches!(Location::parse("/abs/cat.jpg"), Location::Path(_)));
        assert!(matches!(Location::parse("file:///abs/cat.jpg"), Location::Path(_)));
    }

    #[test]
    fn fetch_decodes_bytes_and_names_from_url() {
        let fetcher = MockFetcher::with_body(png_bytes(&gradient_rgb(8, 6)));
        let url = reqwest::Url::parse("https://example.com/gallery/sunset.png").unwrap();

        let source = fetch(&fetcher, &url).unwrap();
        assert_eq!(source.name, "sunset.png");
        assert_eq!((source.image.width(), source.image.height()), (8, 6));
        assert_eq!(fetcher.requested(), vec![url.to_string()]);
    }

    #[test]
    fn fetch_undecodable_body_is_download_error() {
        let fetcher = MockFetcher::with_body(b"<html>not an image</html>".to_vec());
        let url = reqwest::Url::parse("https://example.com/page").unwrap();

        let err = fetch(&fetcher, &url).unwrap_err();
        assert!(matches!(err, SourceError::Download { .. }));
    }

    #[test]
    fn fetch_network_failure_is_propagated() {
        let fetcher = MockFetcher::failing("connection refused");
        let url = reqwest::Url::parse("https://example.com/cat.png").unwrap();

        let err = fetch(&fetcher, &url).unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn load_missing_path_is_not_found() {
        let err = load(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn load_reads_local_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("local.png");
        std::fs::write(&path, png_bytes(&gradient_rgb(5, 4))).unwrap();

        let source = load(&path).unwrap();
        assert_eq!(source.name, "local.png");
        assert_eq!(source.image.width(), 5);
    }

    #[test]
    fn load_garbage_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(load(&path), Err(SourceError::Decode { .. })));
    }

    #[test]
    fn open_routes_paths_to_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("routed.png");
        std::fs::write(&path, png_bytes(&gradient_rgb(3, 3))).unwrap();
        let fetcher = MockFetcher::failing("network must not be used");

        let source = open(&fetcher, path.to_str().unwrap()).unwrap();
        assert_eq!(source.name, "routed.png");
        assert!(fetcher.requested().is_empty());
    }
}
