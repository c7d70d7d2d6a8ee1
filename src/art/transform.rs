//! Deterministic artwork transforms: cover-fit scaling and center cropping.
//!
//! All crop offsets use integer floor division so the same source always
//! produces the same pixels, regardless of where the transform runs.

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Target geometry for a rendered artwork surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSpec {
    pub target_w: u32,
    pub target_h: u32,
    /// Crop the source to a centered square before scaling.
    pub crop_to_square: bool,
}

impl RenderSpec {
    pub fn new(target_w: u32, target_h: u32) -> Self {
        Self {
            target_w,
            target_h,
            crop_to_square: false,
        }
    }

    /// Square target of the given side, the common case for cover art.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn with_square_crop(mut self) -> Self {
        self.crop_to_square = true;
        self
    }
}

/// Render a decoded image to the spec's exact target size.
pub fn render(src: &RgbaImage, spec: RenderSpec) -> RgbaImage {
    if spec.crop_to_square && src.width() != src.height() {
        let squared = square_crop(src);
        cover_fit(&squared, spec.target_w, spec.target_h)
    } else {
        cover_fit(src, spec.target_w, spec.target_h)
    }
}

/// Crop a centered square of side `min(width, height)` from the source.
pub fn square_crop(src: &RgbaImage) -> RgbaImage {
    let (w, h) = src.dimensions();
    let side = w.min(h);
    if side == 0 || w == h {
        return src.clone();
    }

    let offset_x = (w - side) / 2;
    let offset_y = (h - side) / 2;
    imageops::crop_imm(src, offset_x, offset_y, side, side).to_image()
}

/// Scale so both dimensions cover the target box, then center-crop to
/// exactly `(target_w, target_h)`.
///
/// Degenerate inputs (zero-sized source or target, or an empty computed
/// crop) fall back to the best available image instead of failing.
pub fn cover_fit(src: &RgbaImage, target_w: u32, target_h: u32) -> RgbaImage {
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 || target_w == 0 || target_h == 0 {
        return src.clone();
    }

    let scale = f64::max(
        f64::from(target_w) / f64::from(w),
        f64::from(target_h) / f64::from(h),
    );
    let new_w = (f64::from(w) * scale).round() as u32;
    let new_h = (f64::from(h) * scale).round() as u32;

    let scaled = if (new_w, new_h) == (w, h) {
        src.clone()
    } else {
        imageops::resize(src, new_w.max(1), new_h.max(1), FilterType::Lanczos3)
    };

    let (scaled_w, scaled_h) = scaled.dimensions();
    if scaled_w > target_w || scaled_h > target_h {
        let offset_x = scaled_w.saturating_sub(target_w) / 2;
        let offset_y = scaled_h.saturating_sub(target_h) / 2;
        // Never request more than remains past the offset
        let crop_w = target_w.min(scaled_w - offset_x);
        let crop_h = target_h.min(scaled_h - offset_y);

        if crop_w > 0 && crop_h > 0 {
            return imageops::crop_imm(&scaled, offset_x, offset_y, crop_w, crop_h).to_image();
        }
    }

    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Image whose pixel at (x, y) encodes its own coordinates, so crops
    /// can be checked for exact placement.
    fn coordinate_image(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn test_cover_fit_yields_exact_target_size() {
        for (w, h, tw, th) in [
            (1, 1, 5, 3),
            (37, 23, 16, 16),
            (200, 100, 100, 100),
            (3, 400, 64, 48),
        ] {
            let src = coordinate_image(w, h);
            let out = cover_fit(&src, tw, th);
            assert_eq!(out.dimensions(), (tw, th), "source {}x{}", w, h);
        }
    }

    #[test]
    fn test_cover_fit_crops_centered_without_upscale() {
        // 200x100 into 100x100: scale stays 1.0, crop starts at x=50
        let src = coordinate_image(200, 100);
        let out = cover_fit(&src, 100, 100);

        assert_eq!(out.dimensions(), (100, 100));
        assert_eq!(out.get_pixel(0, 0), src.get_pixel(50, 0));
        assert_eq!(out.get_pixel(99, 99), src.get_pixel(149, 99));
    }

    #[test]
    fn test_cover_fit_upscales_small_sources() {
        let src = coordinate_image(2, 2);
        let out = cover_fit(&src, 100, 50);
        assert_eq!(out.dimensions(), (100, 50));
    }

    #[test]
    fn test_cover_fit_degenerate_target_returns_source() {
        let src = coordinate_image(8, 6);
        assert_eq!(cover_fit(&src, 0, 10).dimensions(), (8, 6));
        assert_eq!(cover_fit(&src, 10, 0).dimensions(), (8, 6));
    }

    #[test]
    fn test_square_crop_side_and_offsets() {
        // 7x4 source: side 4, offsets (1, 0)
        let src = coordinate_image(7, 4);
        let out = square_crop(&src);

        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.get_pixel(0, 0), src.get_pixel(1, 0));
        assert_eq!(out.get_pixel(3, 3), src.get_pixel(4, 3));
    }

    #[test]
    fn test_square_crop_tall_source() {
        // 4x9 source: side 4, offsets (0, 2)
        let src = coordinate_image(4, 9);
        let out = square_crop(&src);

        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.get_pixel(0, 0), src.get_pixel(0, 2));
    }

    #[test]
    fn test_square_crop_square_source_untouched() {
        let src = coordinate_image(5, 5);
        let out = square_crop(&src);
        assert_eq!(out, src);
    }

    #[test]
    fn test_render_square_crop_then_cover() {
        let src = coordinate_image(200, 100);
        let spec = RenderSpec::square(50).with_square_crop();
        let out = render(&src, spec);

        assert_eq!(out.dimensions(), (50, 50));
        // Square crop keeps columns 50..150; scaling 100 -> 50 halves both axes
        assert_eq!(out.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn test_render_without_square_crop_matches_cover_fit() {
        let src = coordinate_image(120, 80);
        let spec = RenderSpec::new(60, 60);
        assert_eq!(render(&src, spec), cover_fit(&src, 60, 60));
    }
}
