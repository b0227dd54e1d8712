//! Android density drawable generation from a single xxxhdpi source image
//!
//! The source is resampled once per density bucket (mdpi through xxxhdpi) and
//! each result is written to `<root>/drawable-<density>/<name>.png`.

#![forbid(unsafe_code)]

/// Density buckets, scale factors and target dimension rounding
pub mod density;
/// Generation engine, request and report types
pub mod generation;
/// Input/output operations, CLI, logging and error handling
pub mod io;

pub use io::error::{DrawableError, Result};
