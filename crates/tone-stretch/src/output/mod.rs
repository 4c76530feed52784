//! Output types and encoders.
//!
//! [`Rgb8Image`] is the pipeline's final product. It can be encoded as the
//! full-resolution artifact ([`encode`], TIFF or PNG) or as a bounded-width
//! PNG preview ([`preview_png`]).

mod encode;
mod error;
mod preview;
mod rgb8;

pub use encode::{encode, encode_png, encode_tiff, OutputFormat};
pub use error::EncodeError;
pub use preview::{preview_dimensions, preview_png, render_preview, DEFAULT_PREVIEW_WIDTH};
pub use rgb8::Rgb8Image;
