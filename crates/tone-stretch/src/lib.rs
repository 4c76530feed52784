//! tone-stretch: tone mapping for linear astronomical images
//!
//! This library turns a linear, low-dynamic-range capture (a stacked deep-sky
//! frame, typically 16-bit or float TIFF) into a visually stretched,
//! color-corrected 8-bit RGB image.
//!
//! # Quick Start
//!
//! ```
//! use tone_stretch::{process, RgbBuffer, StretchParams};
//!
//! let buffer = RgbBuffer::filled(8, 8, [0.5, 0.4, 0.3]).unwrap();
//! let outcome = process(buffer, &StretchParams::default()).unwrap();
//!
//! assert_eq!(outcome.image.width(), 8);
//! println!("branch: {}", outcome.report.branch);
//! ```
//!
//! Files and in-memory encoded images go through [`process_path`] and
//! [`process_bytes`], which decode with the TIFF reader first and the generic
//! `image` reader as fallback.
//!
//! # Pipeline
//!
//! ```text
//! raster (any sample type)
//!     |
//!     v
//! [Load + normalize]       f32 by value, divide by global max if > 1
//!     |
//!     v
//! [Branch::detect]         max < 0.9 && mean < 0.1 ?
//!     |                 \
//!     | standard         \ raw
//!     |                   v
//!     |              [auto_stretch]     per-channel percentile stretch, v^0.35
//!     |                   |
//!     v                   v
//! [Channel correction]   [Channel correction]   gamma + gain per channel
//!     |                   |
//!     v                   v
//! [Tone curve]           [to 8-bit]
//!     |                   |
//!     v                   |
//! [to 8-bit + HSV boost]  |
//!     |                   |
//!     v                   v
//! Rgb8Image + StretchReport
//! ```
//!
//! ## Branches
//!
//! A frame straight out of the stacker is linear: nearly every pixel sits
//! within a few percent of black. Such frames (global max below 0.9 and mean
//! below 0.1) take the **raw** branch, where each channel is stretched to its
//! own `[0.001%, 99.999%]` percentile range and lifted with `v^0.35`. The
//! percentile clip makes the stretch robust to hot pixels.
//!
//! Anything brighter is assumed to be stretched already and takes the
//! **standard** branch, which shapes it with a luminosity tone curve and a
//! brightness-weighted saturation boost instead.
//!
//! ## Tone curve continuity
//!
//! The tone curve is continuous at `dark_threshold` but generally not at
//! `mid_threshold`: with default parameters it jumps by about 0.02 there.
//! Parameters are applied as given. [`StretchReport::mid_discontinuity`]
//! exposes the jump so callers can warn about it.
//!
//! ## Quantization
//!
//! Conversion to 8 bits truncates (`(v * 255) as u8`). HSV hue and
//! saturation are kept in `f32` during the saturation boost, so with a zero
//! boost the standard branch reproduces its 8-bit buffer within one step.

pub mod api;
pub mod buffer;
pub mod correct;
pub mod decode;
pub mod output;
pub mod params;
pub mod stretch;
pub mod tone;

#[cfg(test)]
mod domain_tests;

pub use api::{process, process_bytes, process_path, StretchError, StretchOutcome, StretchReport};
pub use buffer::{Channel, RawSample, RgbBuffer};
pub use decode::{load_bytes, load_path, DecodeError};
pub use output::{EncodeError, OutputFormat, Rgb8Image};
pub use params::{ParamError, StretchParams};
pub use stretch::{Branch, ChannelRange};
pub use tone::{Hsv, ToneCurve};
