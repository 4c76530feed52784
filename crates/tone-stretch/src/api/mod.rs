//! Public API for the tone-stretch crate.
//!
//! This module provides the high-level entry points ([`process`],
//! [`process_bytes`], [`process_path`]) and the [`StretchError`] unified
//! error type.

mod error;
mod pipeline;

pub use error::StretchError;
pub use pipeline::{process, process_bytes, process_path, StretchOutcome, StretchReport};
