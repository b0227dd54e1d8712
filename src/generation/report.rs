//! Aggregated result of one generation run

use crate::density::Density;
use crate::io::error::DrawableError;
use std::path::{Path, PathBuf};

/// A file written for one density
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDrawable {
    /// Density the file was generated for
    pub density: Density,
    /// Location of the written PNG
    pub path: PathBuf,
    /// Width of the written image in pixels
    pub width: u32,
    /// Height of the written image in pixels
    pub height: u32,
}

/// A density that could not be generated
#[derive(Debug)]
pub struct DensityFailure {
    /// Identifier as it appeared in the request
    pub density: String,
    /// Why generation failed
    pub error: DrawableError,
}

impl DensityFailure {
    /// Human readable failure description
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// How a run went, from the caller's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No density failed
    Success,
    /// Some densities were generated, some failed
    PartialSuccess,
    /// Every requested density failed
    Failure,
}

/// Success count and ordered per-density failures of one run
#[derive(Debug, Default)]
pub struct GenerationReport {
    generated: Vec<GeneratedDrawable>,
    failures: Vec<DensityFailure>,
}

impl GenerationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully written density
    pub fn record_success(&mut self, drawable: GeneratedDrawable) {
        self.generated.push(drawable);
    }

    /// Record a failed density
    pub fn record_failure(&mut self, density: impl Into<String>, error: DrawableError) {
        self.failures.push(DensityFailure {
            density: density.into(),
            error,
        });
    }

    /// Number of files written
    pub fn success_count(&self) -> usize {
        self.generated.len()
    }

    /// Files written, in request order
    pub fn generated(&self) -> &[GeneratedDrawable] {
        &self.generated
    }

    /// Failures, in request order
    pub fn failures(&self) -> &[DensityFailure] {
        &self.failures
    }

    /// Path written for a density, if it succeeded
    pub fn path_for(&self, density: Density) -> Option<&Path> {
        self.generated
            .iter()
            .find(|drawable| drawable.density == density)
            .map(|drawable| drawable.path.as_path())
    }

    /// Number of densities the engine attempted
    pub fn attempted(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    /// Classify the run; an empty report counts as success
    pub fn outcome(&self) -> Outcome {
        match (self.generated.is_empty(), self.failures.is_empty()) {
            (_, true) => Outcome::Success,
            (false, false) => Outcome::PartialSuccess,
            (true, false) => Outcome::Failure,
        }
    }
}
