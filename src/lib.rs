//! Astrostretch - tone mapping for astrophotography
//!
//! Command-line front end for the `tone-stretch` pipeline: configuration,
//! file naming, previews and batch processing.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
