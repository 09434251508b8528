//! Luma/chroma separation for RGB images.
//!
//! Uses the full-range ITU-R BT.601 (JPEG) YCbCr transform, so equalizing the
//! Y plane leaves hue and saturation alone.

use image::{GrayImage, Rgb, RgbImage};

/// An RGB image split into planar Y, Cb and Cr channels.
pub struct YCbCrPlanes {
    pub width: u32,
    pub height: u32,
    pub y: Vec<u8>,
    pub cb: Vec<u8>,
    pub cr: Vec<u8>,
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// BT.601 luma of a single RGB pixel.
#[inline]
pub fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    to_u8(0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32)
}

impl YCbCrPlanes {
    pub fn from_rgb(img: &RgbImage) -> Self {
        let len = (img.width() * img.height()) as usize;
        let mut y = Vec::with_capacity(len);
        let mut cb = Vec::with_capacity(len);
        let mut cr = Vec::with_capacity(len);

        for Rgb([r, g, b]) in img.pixels().copied() {
            let (rf, gf, bf) = (r as f32, g as f32, b as f32);
            y.push(luma_601(r, g, b));
            cb.push(to_u8(128.0 - 0.168736 * rf - 0.331264 * gf + 0.5 * bf));
            cr.push(to_u8(128.0 + 0.5 * rf - 0.418688 * gf - 0.081312 * bf));
        }

        Self {
            width: img.width(),
            height: img.height(),
            y,
            cb,
            cr,
        }
    }

    /// Recombine the planes into RGB.
    pub fn to_rgb(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |col, row| {
            let idx = (row * self.width + col) as usize;
            let y_val = self.y[idx] as f32;
            let cb_f = self.cb[idx] as f32 - 128.0;
            let cr_f = self.cr[idx] as f32 - 128.0;
            Rgb([
                to_u8(y_val + 1.402 * cr_f),
                to_u8(y_val - 0.344136 * cb_f - 0.714136 * cr_f),
                to_u8(y_val + 1.772 * cb_f),
            ])
        })
    }
}

/// Convert RGB to 8-bit grayscale with BT.601 weights.
pub fn grayscale_601(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        image::Luma([luma_601(r, g, b)])
    })
}
