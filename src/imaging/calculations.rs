//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the largest size that fits inside `target` with the source aspect ratio.
///
/// One dimension matches the target exactly; the other is derived from the
/// source ratio and truncated. Neither dimension drops below 1 pixel.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Canvas dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Scaled dimensions, never larger than `target`
///
/// # Examples
/// ```
/// # use photokit::imaging::calculate_fit_dimensions;
/// // 16:9 into a square: width is clamped, height derived
/// assert_eq!(calculate_fit_dimensions((1920, 1080), (1080, 1080)), (1080, 607));
///
/// // 1:2 portrait into 16:9: height is clamped, width derived
/// assert_eq!(calculate_fit_dimensions((1000, 2000), (1280, 720)), (360, 720));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: width matches, height shrinks
        let w = tgt_w;
        let h = (w as f64 / src_aspect) as u32;
        (w, h.clamp(1, tgt_h))
    } else {
        // Source is taller (or same shape): height matches, width shrinks
        let h = tgt_h;
        let w = (h as f64 * src_aspect) as u32;
        (w.clamp(1, tgt_w), h)
    }
}

/// Top-left offset that centers `inner` on `outer`, using floor division.
pub fn calculate_centered_offset(outer: (u32, u32), inner: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(inner.0) / 2,
        outer.1.saturating_sub(inner.1) / 2,
    )
}
