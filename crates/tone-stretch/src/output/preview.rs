//! Bounded-width preview rendering.

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::encode::{dimensions_u32, encode_png};
use super::{EncodeError, Rgb8Image};

/// Default preview width bound, in pixels.
pub const DEFAULT_PREVIEW_WIDTH: usize = 1200;

/// Preview dimensions for an image of `width x height` bounded to `max_width`.
///
/// Aspect ratio is preserved with `height = floor(h * max_w / w)` (at least
/// one row). Images already within the bound keep their size.
pub fn preview_dimensions(width: usize, height: usize, max_width: usize) -> (usize, usize) {
    if width <= max_width {
        return (width, height);
    }
    let scaled = (height as u128 * max_width as u128 / width as u128) as usize;
    (max_width, scaled.max(1))
}

/// Downscale with Lanczos3 so the width does not exceed `max_width`.
pub fn render_preview(image: &Rgb8Image, max_width: usize) -> Result<Rgb8Image, EncodeError> {
    if max_width == 0 {
        return Err(EncodeError::InvalidPreviewWidth);
    }
    let (new_width, new_height) = preview_dimensions(image.width(), image.height(), max_width);
    if new_width == image.width() {
        return Ok(image.clone());
    }

    let (width, height) = dimensions_u32(image)?;
    let source = RgbImage::from_raw(width, height, image.as_raw().to_vec()).ok_or(
        EncodeError::TooLarge {
            width: image.width(),
            height: image.height(),
        },
    )?;
    let resized = imageops::resize(
        &source,
        new_width as u32,
        new_height as u32,
        FilterType::Lanczos3,
    );
    Ok(Rgb8Image::new(new_width, new_height, resized.into_raw()))
}

/// Render the preview and encode it as PNG.
pub fn preview_png(image: &Rgb8Image, max_width: usize) -> Result<Vec<u8>, EncodeError> {
    encode_png(&render_preview(image, max_width)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_within_bound_unchanged() {
        assert_eq!(preview_dimensions(800, 600, 1200), (800, 600));
        assert_eq!(preview_dimensions(1200, 900, 1200), (1200, 900));
    }

    #[test]
    fn test_dimensions_floor_height() {
        // 1000 * 1200 / 4000 = 300
        assert_eq!(preview_dimensions(4000, 1000, 1200), (1200, 300));
        // 999 * 100 / 300 = 333
        assert_eq!(preview_dimensions(300, 999, 100), (100, 333));
        // 7 * 10 / 30 = 2.33 -> 2
        assert_eq!(preview_dimensions(30, 7, 10), (10, 2));
    }

    #[test]
    fn test_extreme_panorama_keeps_one_row() {
        assert_eq!(preview_dimensions(10_000, 1, 100), (100, 1));
    }

    #[test]
    fn test_render_preview_downscales() {
        let image = Rgb8Image::new(40, 20, vec![128; 40 * 20 * 3]);
        let preview = render_preview(&image, 10).unwrap();
        assert_eq!((preview.width(), preview.height()), (10, 5));
        // Uniform input stays uniform under Lanczos
        assert!(preview.as_raw().iter().all(|&v| (127..=129).contains(&v)));
    }

    #[test]
    fn test_render_preview_small_image_is_copy() {
        let image = Rgb8Image::new(4, 4, vec![7; 48]);
        assert_eq!(render_preview(&image, 1200).unwrap(), image);
    }

    #[test]
    fn test_zero_width_rejected() {
        let image = Rgb8Image::new(4, 4, vec![7; 48]);
        assert_eq!(
            render_preview(&image, 0),
            Err(EncodeError::InvalidPreviewWidth)
        );
    }

    #[test]
    fn test_preview_png_is_png() {
        let image = Rgb8Image::new(30, 10, vec![200; 30 * 10 * 3]);
        let bytes = preview_png(&image, 15).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (15, 5));
    }
}
