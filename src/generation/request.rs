//! Generation request value object

use crate::io::error::{Result, invalid_request};
use crate::io::output::check_base_filename;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Everything the engine needs for one run
///
/// The source image stays owned by the caller; the engine only reads it.
/// Density identifiers are kept as supplied so unknown ones surface as
/// per-density failures instead of rejecting the whole request.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    source: &'a DynamicImage,
    base_filename: String,
    target_densities: Vec<String>,
    output_root: PathBuf,
}

impl<'a> GenerationRequest<'a> {
    /// Create a request; repeated density identifiers are dropped, keeping the first
    pub fn new<I, S>(
        source: &'a DynamicImage,
        base_filename: impl Into<String>,
        target_densities: I,
        output_root: impl Into<PathBuf>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut densities: Vec<String> = Vec::new();
        for density in target_densities {
            let density = density.into();
            if !densities.contains(&density) {
                densities.push(density);
            }
        }

        Self {
            source,
            base_filename: base_filename.into(),
            target_densities: densities,
            output_root: output_root.into(),
        }
    }

    /// Check the caller-side preconditions
    ///
    /// # Errors
    ///
    /// Returns [`crate::DrawableError::InvalidRequest`] if:
    /// - No densities were selected
    /// - The base filename is empty or contains a path separator
    pub fn validate(&self) -> Result<()> {
        if self.target_densities.is_empty() {
            return Err(invalid_request(&"at least one target density must be selected"));
        }
        check_base_filename(&self.base_filename)
    }

    /// The decoded source image
    pub const fn source(&self) -> &'a DynamicImage {
        self.source
    }

    /// File name of every output, without extension
    pub fn base_filename(&self) -> &str {
        &self.base_filename
    }

    /// Requested density identifiers in request order
    pub fn target_densities(&self) -> &[String] {
        &self.target_densities
    }

    /// Directory the `drawable-*` directories are created in
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}
