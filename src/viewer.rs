//! Showing results to the user.
//!
//! [`SystemViewer`] hands the image to an external program: the image is
//! written to a kept temporary PNG and the viewer is spawned without waiting
//! for it. The viewer outlives the preview's creation, so previews stay on
//! disk for the rest of the session and are removed when the `SystemViewer`
//! is dropped. [`NoViewer`] is used when display is turned off.

use image::{DynamicImage, ImageFormat};
use std::path::PathBuf;
use std::process::Command;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode preview: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to keep preview file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Displays an image to the user.
pub trait Viewer {
    fn show(&self, image: &DynamicImage, title: &str) -> Result<(), ViewerError>;
}

impl<T: Viewer + ?Sized> Viewer for &T {
    fn show(&self, image: &DynamicImage, title: &str) -> Result<(), ViewerError> {
        (**self).show(image, title)
    }
}

/// Discards everything; used with `--no-display`.
pub struct NoViewer;

impl Viewer for NoViewer {
    fn show(&self, _image: &DynamicImage, title: &str) -> Result<(), ViewerError> {
        tracing::debug!(title, "Display disabled, skipping preview");
        Ok(())
    }
}

/// Opens previews with an external program.
pub struct SystemViewer {
    program: String,
    args: Vec<String>,
    previews: Mutex<Vec<PathBuf>>,
}

#[cfg(target_os = "macos")]
fn default_opener() -> (&'static str, &'static [&'static str]) {
    ("open", &[])
}

#[cfg(target_os = "windows")]
fn default_opener() -> (&'static str, &'static [&'static str]) {
    ("cmd", &["/C", "start", ""])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_opener() -> (&'static str, &'static [&'static str]) {
    ("xdg-open", &[])
}

impl SystemViewer {
    /// Use `program` if given, otherwise the platform's default opener.
    pub fn new(program: Option<&str>) -> Self {
        match program {
            Some(p) => Self {
                program: p.to_string(),
                args: Vec::new(),
                previews: Mutex::new(Vec::new()),
            },
            None => {
                let (program, args) = default_opener();
                Self {
                    program: program.to_string(),
                    args: args.iter().map(|a| a.to_string()).collect(),
                    previews: Mutex::new(Vec::new()),
                }
            }
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Preview file prefix, derived from the title so viewer windows are recognizable.
fn preview_prefix(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("photokit-{}-", cleaned.trim_matches('-'))
}

impl Viewer for SystemViewer {
    fn show(&self, image: &DynamicImage, title: &str) -> Result<(), ViewerError> {
        let file = tempfile::Builder::new()
            .prefix(&preview_prefix(title))
            .suffix(".png")
            .tempfile()?;
        image.save_with_format(file.path(), ImageFormat::Png)?;
        let (_, path) = file.keep()?;

        tracing::debug!(program = %self.program, path = %path.display(), "Opening preview");
        if let Err(e) = Command::new(&self.program)
            .args(&self.args)
            .arg(&path)
            .spawn()
        {
            let _ = std::fs::remove_file(&path);
            return Err(e.into());
        }
        if let Ok(mut previews) = self.previews.lock() {
            previews.push(path);
        }
        Ok(())
    }
}

impl Drop for SystemViewer {
    fn drop(&mut self) {
        let previews = match self.previews.get_mut() {
            Ok(previews) => std::mem::take(previews),
            Err(poisoned) => std::mem::take(poisoned.into_inner()),
        };
        for path in previews {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::debug!(path = %path.display(), error = %e, "Preview already gone");
            }
        }
    }
}
