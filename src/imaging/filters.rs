//! Fixed convolution kernels for the filter menu.
//!
//! Each output channel is `offset + sum(weight * pixel) / scale`, clamped to
//! 0..=255 and truncated. Pixels closer to the border than the kernel radius
//! are copied unchanged. Alpha is never filtered.

use super::params::{Filter, FilterChoice};
use image::{DynamicImage, ImageBuffer, Pixel};

/// A square convolution kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    pub size: usize,
    pub weights: &'static [f32],
    pub scale: f32,
    pub offset: f32,
}

#[rustfmt::skip]
const BLUR: Kernel = Kernel {
    size: 5,
    weights: &[
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    scale: 16.0,
    offset: 0.0,
};

#[rustfmt::skip]
const CONTOUR: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0,  8.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    scale: 1.0,
    offset: 255.0,
};

#[rustfmt::skip]
const DETAIL: Kernel = Kernel {
    size: 3,
    weights: &[
         0.0, -1.0,  0.0,
        -1.0, 10.0, -1.0,
         0.0, -1.0,  0.0,
    ],
    scale: 6.0,
    offset: 0.0,
};

#[rustfmt::skip]
const EDGE_ENHANCE: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0, 10.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    scale: 2.0,
    offset: 0.0,
};

#[rustfmt::skip]
const EDGE_ENHANCE_MORE: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0,  9.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    scale: 1.0,
    offset: 0.0,
};

#[rustfmt::skip]
const EMBOSS: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, 0.0, 0.0,
         0.0, 1.0, 0.0,
         0.0, 0.0, 0.0,
    ],
    scale: 1.0,
    offset: 128.0,
};

#[rustfmt::skip]
const FIND_EDGES: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0,  8.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    scale: 1.0,
    offset: 0.0,
};

#[rustfmt::skip]
const SHARPEN: Kernel = Kernel {
    size: 3,
    weights: &[
        -2.0, -2.0, -2.0,
        -2.0, 32.0, -2.0,
        -2.0, -2.0, -2.0,
    ],
    scale: 16.0,
    offset: 0.0,
};

#[rustfmt::skip]
const SMOOTH: Kernel = Kernel {
    size: 3,
    weights: &[
        1.0, 1.0, 1.0,
        1.0, 5.0, 1.0,
        1.0, 1.0, 1.0,
    ],
    scale: 13.0,
    offset: 0.0,
};

impl Filter {
    pub fn kernel(self) -> &'static Kernel {
        match self {
            Filter::Blur => &BLUR,
            Filter::Contour => &CONTOUR,
            Filter::Detail => &DETAIL,
            Filter::EdgeEnhance => &EDGE_ENHANCE,
            Filter::EdgeEnhanceMore => &EDGE_ENHANCE_MORE,
            Filter::Emboss => &EMBOSS,
            Filter::FindEdges => &FIND_EDGES,
            Filter::Sharpen => &SHARPEN,
            Filter::Smooth => &SMOOTH,
        }
    }
}

/// Convolve the first `color_channels` channels of every interior pixel.
pub fn convolve<P>(
    img: &ImageBuffer<P, Vec<u8>>,
    kernel: &Kernel,
    color_channels: usize,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let mut out = img.clone();
    let (width, height) = (img.width() as usize, img.height() as usize);
    let radius = kernel.size / 2;
    if width <= 2 * radius || height <= 2 * radius {
        return out;
    }

    let channels = P::CHANNEL_COUNT as usize;
    let src = img.as_raw();
    let dst: &mut [u8] = &mut out;

    for y in radius..height - radius {
        for x in radius..width - radius {
            for c in 0..color_channels {
                let mut sum = 0.0f32;
                for ky in 0..kernel.size {
                    let row = (y + ky - radius) * width;
                    for kx in 0..kernel.size {
                        let weight = kernel.weights[ky * kernel.size + kx];
                        if weight != 0.0 {
                            let idx = (row + x + kx - radius) * channels + c;
                            sum += weight * src[idx] as f32;
                        }
                    }
                }
                let value = kernel.offset + sum / kernel.scale;
                dst[(y * width + x) * channels + c] = value.clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}

/// Apply a kernel to any image layout.
///
/// 8-bit grayscale, RGB and RGBA keep their layout; other layouts are
/// converted to 8-bit RGBA first.
pub fn apply_kernel(img: &DynamicImage, kernel: &Kernel) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(convolve(buf, kernel, 1)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(convolve(buf, kernel, 1)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(convolve(buf, kernel, 3)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(convolve(buf, kernel, 3)),
        other => DynamicImage::ImageRgba8(convolve(&other.to_rgba8(), kernel, 3)),
    }
}

/// Apply a menu filter choice. `Original` returns an identical copy.
pub fn apply_choice(img: &DynamicImage, choice: FilterChoice) -> DynamicImage {
    match choice {
        FilterChoice::Original => img.clone(),
        FilterChoice::Apply(filter) => apply_kernel(img, filter.kernel()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{gradient_rgb, solid_rgb};
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn kernel_tables_are_square() {
        for filter in Filter::ALL {
            let k = filter.kernel();
            assert_eq!(k.weights.len(), k.size * k.size, "{filter:?}");
            assert!(k.scale > 0.0);
        }
    }

    #[test]
    fn original_is_pixel_identical() {
        let img = DynamicImage::ImageRgb8(gradient_rgb(20, 10));
        let out = apply_choice(&img, FilterChoice::Original);
        assert_eq!(out.as_bytes(), img.as_bytes());
        assert_eq!(out.color(), img.color());
    }

    #[test]
    fn blur_keeps_uniform_image_uniform() {
        let img = DynamicImage::ImageRgb8(solid_rgb(12, 12, [80, 120, 200]));
        let out = apply_kernel(&img, Filter::Blur.kernel());
        assert_eq!(out.as_bytes(), img.as_bytes());
    }

    #[test]
    fn smooth_keeps_uniform_image_uniform() {
        let img = DynamicImage::ImageRgb8(solid_rgb(6, 6, [13, 26, 39]));
        let out = apply_kernel(&img, Filter::Smooth.kernel());
        assert_eq!(out.as_bytes(), img.as_bytes());
    }

    #[test]
    fn find_edges_zeroes_flat_interior() {
        let img = GrayImage::from_pixel(5, 5, Luma([90]));
        let out = convolve(&img, Filter::FindEdges.kernel(), 1);
        assert_eq!(out.get_pixel(2, 2).0[0], 0);
        // Border copied through
        assert_eq!(out.get_pixel(0, 0).0[0], 90);
        assert_eq!(out.get_pixel(4, 2).0[0], 90);
    }

    #[test]
    fn contour_and_emboss_use_offsets() {
        let img = GrayImage::from_pixel(5, 5, Luma([90]));
        let contour = convolve(&img, Filter::Contour.kernel(), 1);
        assert_eq!(contour.get_pixel(2, 2).0[0], 255);
        let emboss = convolve(&img, Filter::Emboss.kernel(), 1);
        assert_eq!(emboss.get_pixel(2, 2).0[0], 128);
    }

    #[test]
    fn emboss_lights_edges_from_top_left() {
        // Dark left, bright right: the first bright column faces the light
        let img = GrayImage::from_fn(8, 5, |x, _| Luma([if x < 4 { 0 } else { 200 }]));
        let out = convolve(&img, Filter::Emboss.kernel(), 1);
        assert_eq!(out.get_pixel(3, 2).0[0], 128);
        assert_eq!(out.get_pixel(4, 2).0[0], 255);
        assert_eq!(out.get_pixel(5, 2).0[0], 128);

        // Mirrored: the first dark column is in shadow
        let img = GrayImage::from_fn(8, 5, |x, _| Luma([if x < 4 { 200 } else { 0 }]));
        let out = convolve(&img, Filter::Emboss.kernel(), 1);
        assert_eq!(out.get_pixel(3, 2).0[0], 128);
        assert_eq!(out.get_pixel(4, 2).0[0], 0);

        // Dark top, bright bottom: the first bright row faces the light
        let img = GrayImage::from_fn(5, 8, |_, y| Luma([if y < 4 { 0 } else { 200 }]));
        let out = convolve(&img, Filter::Emboss.kernel(), 1);
        assert_eq!(out.get_pixel(2, 4).0[0], 255);
        assert_eq!(out.get_pixel(2, 5).0[0], 128);
    }

    #[test]
    fn find_edges_detects_step() {
        // Left half black, right half white
        let img = GrayImage::from_fn(6, 3, |x, _| Luma([if x < 3 { 0 } else { 255 }]));
        let out = convolve(&img, Filter::FindEdges.kernel(), 1);
        assert_eq!(out.get_pixel(1, 1).0[0], 0);
        assert_eq!(out.get_pixel(3, 1).0[0], 255);
    }

    #[test]
    fn alpha_channel_is_preserved() {
        let img = RgbaImage::from_fn(5, 5, |x, y| Rgba([(x * 50) as u8, (y * 50) as u8, 0, 77]));
        let out = convolve(&img, Filter::Sharpen.kernel(), 3);
        assert!(out.pixels().all(|p| p.0[3] == 77));
    }

    #[test]
    fn tiny_images_pass_through() {
        let img = DynamicImage::ImageRgb8(gradient_rgb(4, 4));
        let out = apply_kernel(&img, Filter::Blur.kernel());
        assert_eq!(out.as_bytes(), img.as_bytes());
    }

    #[test]
    fn every_filter_preserves_dimensions_and_layout() {
        let img = DynamicImage::ImageRgb8(gradient_rgb(17, 9));
        for filter in Filter::ALL {
            let out = apply_choice(&img, FilterChoice::Apply(filter));
            assert_eq!((out.width(), out.height()), (17, 9), "{filter:?}");
            assert!(out.as_rgb8().is_some(), "{filter:?}");
        }
    }
}
