//! Shared test utilities.
//!
//! Synthetic images, PNG encoding, and in-memory stand-ins for the network
//! and the viewer, so no test needs a connection or a display.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fetcher = MockFetcher::with_body(png_bytes(&gradient_rgb(64, 48)));
//! let viewer = RecordingViewer::new();
//! // ... run the controller ...
//! assert_eq!(fetcher.requested().len(), 1);
//! assert_eq!(viewer.shown()[0].0, "sketch_cat.png");
//! ```

use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use crate::source::{Fetcher, SourceError, SourceImage};
use crate::viewer::{Viewer, ViewerError};

// =========================================================================
// Synthetic images
// =========================================================================

/// Diagonal gradient: red follows x, green follows y, blue is their mix.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.saturating_sub(1).max(1)) as u8;
        let g = (y * 255 / height.saturating_sub(1).max(1)) as u8;
        Rgb([r, g, ((r as u16 + g as u16) / 2) as u8])
    })
}

/// Single-color image.
pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Encode an RGB image as PNG bytes.
pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

pub fn source_image(image: DynamicImage, name: &str) -> SourceImage {
    SourceImage {
        image,
        name: name.to_string(),
    }
}

// =========================================================================
// Log capture
// =========================================================================

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

// =========================================================================
// Fakes for the injected boundaries
// =========================================================================

/// Fetcher that returns a fixed body (or a fixed failure) for every URL and
/// records what was requested.
pub struct MockFetcher {
    body: Result<Vec<u8>, String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn with_body(body: Vec<u8>) -> Self {
        Self {
            body: Ok(body),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            body: Err(reason.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    fn fetch_bytes(&self, url: &reqwest::Url) -> Result<Vec<u8>, SourceError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.body.clone().map_err(|reason| SourceError::Download {
            url: url.to_string(),
            reason,
        })
    }
}

/// Viewer that records `(title, width, height)` for every image shown.
pub struct RecordingViewer {
    shown: Mutex<Vec<(String, u32, u32)>>,
    fail: bool,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self {
            shown: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A viewer whose every `show` fails with an IO error.
    pub fn failing() -> Self {
        Self {
            shown: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn shown(&self) -> Vec<(String, u32, u32)> {
        self.shown.lock().unwrap().clone()
    }
}

impl Viewer for RecordingViewer {
    fn show(&self, image: &DynamicImage, title: &str) -> Result<(), ViewerError> {
        if self.fail {
            return Err(ViewerError::Io(io::Error::other("no display available")));
        }
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), image.width(), image.height()));
        Ok(())
    }
}
