//! 8-bit RGB output image.

/// Final pipeline output: interleaved 8-bit RGB, row-major.
///
/// # Example
///
/// ```
/// use tone_stretch::Rgb8Image;
///
/// let image = Rgb8Image::new(2, 1, vec![255, 0, 0, 0, 0, 255]);
/// assert_eq!(image.pixel(1, 0), [0, 0, 255]);
/// assert_eq!(image.as_raw().len(), 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgb8Image {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Rgb8Image {
    /// Wrap interleaved RGB bytes.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height * 3`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height * 3,
            "pixel buffer length ({}) must match width * height * 3 ({}x{}x3)",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Interleaved RGB bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub(crate) fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.pixels.chunks_exact_mut(3)
    }
}
