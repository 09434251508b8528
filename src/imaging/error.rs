//! Errors raised by the imaging operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("Unsupported platform '{name}'. Valid options: {valid}")]
    UnsupportedPlatform { name: String, valid: String },
    #[error("Invalid filter option {0}. Choose a number between 1 and 10")]
    InvalidFilter(i64),
    #[error("The image does not contain a person")]
    NoPerson,
    #[error("Failed to save {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
