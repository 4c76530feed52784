//! Stretch parameters.
//!
//! [`StretchParams`] carries the eleven caller-tunable values of the
//! pipeline. [`StretchParams::validate`] enforces their domains; the
//! pipeline calls it before processing.

mod error;
mod stretch_params;

pub use error::ParamError;
pub use stretch_params::StretchParams;
