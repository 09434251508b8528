//! # Photokit
//!
//! An interactive, menu-driven image utility. Point it at an image URL or a
//! local file and it will:
//!
//! ```text
//! 1. Resize    letterbox onto a platform canvas  →  resized_<platform>_<name>
//! 2. Contrast  histogram equalization            →  contrast-adjusted_<name>
//! 3. Filter    one of nine convolution filters   →  shown only, never saved
//! 4. Sketch    pencil-style grayscale rendering  →  sketch_<name>
//! 5. Exit
//! ```
//!
//! Every result is written to the working directory (except filters) and
//! opened in an external image viewer.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | The menu loop: prompts, dispatch, and error recovery |
//! | [`source`] | Turns user input into a decoded image: HTTP download or local file |
//! | [`imaging`] | Pure transforms (letterbox, equalize, filters, sketch) and the save step |
//! | [`naming`] | Output filename conventions and base-name derivation |
//! | [`viewer`] | Hands results to an external viewer program |
//! | [`config`] | Optional `photokit.toml` loading, merging, and validation |
//! | [`output`] | Menu text and result messages as pure format functions |
//!
//! # Design Decisions
//!
//! ## Injected Boundaries
//!
//! The network ([`source::Fetcher`]), the display ([`viewer::Viewer`]), and
//! the terminal (`BufRead`/`Write`) are all passed into the
//! [`controller::Controller`]. A whole interactive session can therefore be
//! scripted in a unit test, with no connection and no display.
//!
//! ## One Recovery Boundary
//!
//! Operations return typed errors and never print. The controller is the only
//! place that catches them: it logs, prints an `Error:` line, and returns to
//! the menu. A bad URL or an unsupported platform never ends the session.
//!
//! ## Pure-Rust Imaging
//!
//! All pixel work uses the `image` crate. Resampling is Lanczos3, and the
//! filter kernels, equalization, and enhancement math are implemented in
//! [`imaging`] so results are byte-for-byte reproducible.

pub mod config;
pub mod controller;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod source;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_helpers;
