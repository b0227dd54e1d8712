//! End-to-end run: validate, decode, reset the default root, generate

use crate::generation::engine::{GenerationObserver, generate_with_observer};
use crate::generation::report::GenerationReport;
use crate::generation::request::GenerationRequest;
use crate::io::error::{Result, invalid_request};
use crate::io::image::{is_supported_input, load_source};
use crate::io::output::{base_filename, prepare_output_root};
use std::path::PathBuf;

/// Inputs of a complete generation run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Source image, assumed to be authored at xxxhdpi
    pub input: PathBuf,
    /// Density identifiers to generate
    pub densities: Vec<String>,
    /// Directory the `drawable-*` directories are written to
    pub output_root: PathBuf,
    /// The built-in output root; only this path is cleared before a run
    pub default_output_root: PathBuf,
}

/// Run the whole generation for one source image
///
/// The source is decoded before the default output root is cleared, so an
/// unreadable input leaves previous output untouched and no density is attempted.
///
/// # Errors
///
/// Returns an error if:
/// - No input path or no density was given, or the input extension is not a
///   supported raster format (`InvalidRequest`)
/// - The source image cannot be opened or decoded (`ImageLoad`)
/// - The default output root exists but cannot be cleared (`FileSystem`)
///
/// Per-density failures are not errors; they are listed in the returned report.
pub fn run<O>(config: &PipelineConfig, observer: &mut O) -> Result<GenerationReport>
where
    O: GenerationObserver + ?Sized,
{
    if config.input.as_os_str().is_empty() {
        return Err(invalid_request(&"no input image given"));
    }
    if !is_supported_input(&config.input) {
        return Err(invalid_request(&format!(
            "'{}' is not a supported image file",
            config.input.display()
        )));
    }

    let base = base_filename(&config.input)?;
    let source = load_source(&config.input)?;

    let request = GenerationRequest::new(
        &source,
        base,
        config.densities.iter().map(String::as_str),
        config.output_root.clone(),
    );
    request.validate()?;

    tracing::info!(
        input = %config.input.display(),
        width = source.width(),
        height = source.height(),
        densities = request.target_densities().len(),
        "loaded source image"
    );

    prepare_output_root(&config.output_root, &config.default_output_root)?;

    Ok(generate_with_observer(&request, observer))
}
