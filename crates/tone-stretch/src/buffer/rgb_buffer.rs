//! The floating-point RGB working buffer.

use super::sample::{sanitize, RawSample};
use crate::decode::DecodeError;
use crate::output::Rgb8Image;

/// One of the three color channels of an [`RgbBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Offset of this channel inside an interleaved pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Interleaved RGB image with `f32` samples, row-major, shape
/// `(height, width, 3)`.
///
/// Samples are never negative or non-finite. After [`normalize`](Self::normalize)
/// and after every pipeline stage they lie in `[0, 1]`.
///
/// # Example
///
/// ```
/// use tone_stretch::RgbBuffer;
///
/// let samples: Vec<u16> = vec![1000, 2000, 4000, 500, 500, 500];
/// let mut buffer = RgbBuffer::from_samples(&samples, 2, 1, 3).unwrap();
/// assert!(buffer.normalize());
/// assert_eq!(buffer.max(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl RgbBuffer {
    /// Wrap interleaved RGB samples.
    ///
    /// Negative and non-finite samples are clamped to zero.
    pub fn new(width: usize, height: usize, mut data: Vec<f32>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::Empty { width, height });
        }
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(DecodeError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        for value in data.iter_mut() {
            *value = sanitize(*value);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer where every pixel has the same color.
    pub fn filled(width: usize, height: usize, rgb: [f32; 3]) -> Result<Self, DecodeError> {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width * height * 3)
            .collect();
        Self::new(width, height, data)
    }

    /// Ingest a native raster with `channels` interleaved samples per pixel.
    ///
    /// - 1 channel (gray) and 2 channels (gray + alpha) are replicated into RGB
    /// - 3 channels are used as-is
    /// - channels beyond the third (alpha, extra bands) are ignored
    pub fn from_samples<T: RawSample>(
        samples: &[T],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::Empty { width, height });
        }
        if channels == 0 {
            return Err(DecodeError::UnsupportedChannels(channels));
        }
        let expected = width * height * channels;
        if samples.len() != expected {
            return Err(DecodeError::ShapeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        let mut data = Vec::with_capacity(width * height * 3);
        for pixel in samples.chunks_exact(channels) {
            if channels < 3 {
                let gray = pixel[0].to_f32();
                data.extend_from_slice(&[gray, gray, gray]);
            } else {
                data.extend(pixel[..3].iter().map(|s| s.to_f32()));
            }
        }

        Self::new(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Interleaved samples.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Iterate pixels as `[r, g, b]` slices.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(3)
    }

    pub(crate) fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, f32> {
        self.data.chunks_exact_mut(3)
    }

    /// The pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Largest sample over all channels.
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(0.0, f32::max)
    }

    /// Mean over all samples of all channels, accumulated in `f64`.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        sum / self.data.len() as f64
    }

    /// Scale the whole buffer into `[0, 1]` by its global maximum.
    ///
    /// Only divides when the maximum exceeds 1; a buffer that is already in
    /// range is left untouched. Returns whether a division happened.
    pub fn normalize(&mut self) -> bool {
        let max = self.max();
        if max <= 1.0 {
            return false;
        }
        for value in self.data.iter_mut() {
            *value /= max;
        }
        true
    }

    /// Clamp every sample to `[0, 1]`.
    pub fn clip(&mut self) {
        for value in self.data.iter_mut() {
            *value = value.clamp(0.0, 1.0);
        }
    }

    /// Copy out all samples of one channel.
    pub fn channel(&self, channel: Channel) -> Vec<f32> {
        let offset = channel.index();
        self.data.iter().skip(offset).step_by(3).copied().collect()
    }

    /// Rewrite every sample of one channel in place.
    pub fn map_channel(&mut self, channel: Channel, mut f: impl FnMut(f32) -> f32) {
        let offset = channel.index();
        for value in self.data.iter_mut().skip(offset).step_by(3) {
            *value = f(*value);
        }
    }

    /// Quantize to 8 bits per channel.
    ///
    /// Samples are clamped to `[0, 1]` and then truncated (`(v * 255) as u8`),
    /// not rounded.
    pub fn to_rgb8(&self) -> Rgb8Image {
        let pixels = self
            .data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
            .collect();
        Rgb8Image::new(self.width, self.height, pixels)
    }
}
