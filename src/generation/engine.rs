//! Per-density generation loop
//!
//! Densities are processed sequentially in request order. They write to
//! disjoint directories, so the order never changes the output. Two runs
//! targeting the same root at once are not coordinated; the last writer wins.

use crate::density::{DensityFactor, factor_for, scaling::target_dimensions};
use crate::generation::report::{GeneratedDrawable, GenerationReport};
use crate::generation::request::GenerationRequest;
use crate::generation::resample::resample;
use crate::io::error::{DrawableError, Result};
use crate::io::image::write_png;
use crate::io::output::{check_base_filename, ensure_density_directory, output_file_path};
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Receives per-density progress notifications from the engine
pub trait GenerationObserver {
    /// Called before a density is attempted
    fn density_started(&mut self, _identifier: &str) {}

    /// Called after a density is done; `error` is set if it failed
    fn density_finished(&mut self, _identifier: &str, _error: Option<&DrawableError>) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

/// Destination for resampled drawables
pub trait DrawableSink {
    /// Persist `image` at `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written
    fn write(&mut self, image: &DynamicImage, path: &Path) -> Result<()>;
}

/// Sink encoding every drawable as a PNG file
#[derive(Debug, Clone, Copy, Default)]
pub struct PngSink;

impl DrawableSink for PngSink {
    fn write(&mut self, image: &DynamicImage, path: &Path) -> Result<()> {
        write_png(image, path)
    }
}

/// Generate a drawable for every requested density
///
/// Never fails: each density's error is recorded in the report and the
/// remaining densities still run. An empty density list yields an empty report.
pub fn generate(request: &GenerationRequest<'_>) -> GenerationReport {
    generate_with_observer(request, &mut NoopObserver)
}

/// Generate a drawable for every requested density, reporting progress to `observer`
pub fn generate_with_observer<O>(
    request: &GenerationRequest<'_>,
    observer: &mut O,
) -> GenerationReport
where
    O: GenerationObserver + ?Sized,
{
    generate_into(request, &mut PngSink, observer)
}

/// Generate a drawable for every requested density, writing through `sink`
pub fn generate_into<S, O>(
    request: &GenerationRequest<'_>,
    sink: &mut S,
    observer: &mut O,
) -> GenerationReport
where
    S: DrawableSink + ?Sized,
    O: GenerationObserver + ?Sized,
{
    let mut report = GenerationReport::new();

    for identifier in request.target_densities() {
        observer.density_started(identifier);

        match generate_density(request, identifier, sink) {
            Ok(drawable) => {
                tracing::debug!(
                    density = %identifier,
                    width = drawable.width,
                    height = drawable.height,
                    path = %drawable.path.display(),
                    "generated drawable"
                );
                observer.density_finished(identifier, None);
                report.record_success(drawable);
            }
            Err(error) => {
                tracing::warn!(density = %identifier, %error, "density generation failed");
                observer.density_finished(identifier, Some(&error));
                report.record_failure(identifier.as_str(), error);
            }
        }
    }

    report
}

fn generate_density<S>(
    request: &GenerationRequest<'_>,
    identifier: &str,
    sink: &mut S,
) -> Result<GeneratedDrawable>
where
    S: DrawableSink + ?Sized,
{
    let factor = factor_for(identifier)?;
    render(request, factor, sink)
}

fn render<S>(
    request: &GenerationRequest<'_>,
    factor: DensityFactor,
    sink: &mut S,
) -> Result<GeneratedDrawable>
where
    S: DrawableSink + ?Sized,
{
    // The file must stay inside its drawable directory
    check_base_filename(request.base_filename())?;

    let source = request.source();
    let (source_width, source_height) = source.dimensions();
    let (width, height) = target_dimensions(source_width, source_height, &factor);

    let resized = resample(source, width, height);

    let density = factor.density();
    ensure_density_directory(request.output_root(), density)?;
    let path = output_file_path(request.output_root(), density, request.base_filename());
    sink.write(&resized, &path)?;

    Ok(GeneratedDrawable {
        density,
        path,
        width,
        height,
    })
}
