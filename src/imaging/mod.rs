//! Image transformations in pure Rust on top of the `image` crate.
//!
//! | Operation | Implementation |
//! |---|---|
//! | **Resize for platform** | fit math + `resize_exact(Lanczos3)` + `imageops::replace` onto white |
//! | **Contrast** | BT.601 YCbCr split + 256-bin histogram lookup table on luma |
//! | **Filters** | fixed 3×3 / 5×5 kernels with scale and offset |
//! | **Sketch** | grayscale → find-edges kernel → contrast ×2 → brightness ×2 |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Closed option sets (platforms, filters, normalization)
//! - **Transforms**: `letterbox`, `equalize`, `filters`, `sketch`, pure image → image
//! - **Operations**: High-level functions combining transforms, naming and saving

mod calculations;
mod color;
pub mod equalize;
mod error;
pub mod filters;
pub mod letterbox;
pub mod operations;
mod params;
pub mod sketch;

pub use calculations::{calculate_centered_offset, calculate_fit_dimensions};
pub use error::ImagingError;
pub use operations::{Rendered, adjust_contrast, apply_filter, resize_for_platform, sketch};
pub use params::{Filter, FilterChoice, Normalization, Platform};
