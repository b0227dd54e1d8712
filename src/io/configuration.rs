//! Output layout constants and runtime configuration defaults

use image::imageops::FilterType;
use std::path::PathBuf;

/// Density bucket identifiers, lowest to highest
pub const DENSITY_IDENTIFIERS: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

// Output settings
/// Prefix of every per-density output directory
pub const DIRECTORY_PREFIX: &str = "drawable-";
/// Extension of every generated file
pub const OUTPUT_EXTENSION: &str = "png";
/// Name of the default output directory, placed next to the executable
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "generated_drawables";

/// Input file extensions accepted by the CLI (compared case-insensitively)
pub const ACCEPTED_INPUT_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// Resampling filter used for every density
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Smallest width or height a generated image may have
pub const MIN_DIMENSION: u32 = 1;

// Logging settings
/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "DRAWABLEGEN_LOG";
/// Filter used when the environment variable is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Filter used with `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "info";
/// Filter used with `--quiet`
pub const QUIET_LOG_LEVEL: &str = "error";

// Progress bar display settings
/// Template for the per-density progress bar
pub const PROGRESS_TEMPLATE: &str = "{prefix:>8} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// Default output root: `generated_drawables` beside the running executable
///
/// Falls back to a relative `generated_drawables` when the executable path
/// cannot be determined.
pub fn default_output_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_OUTPUT_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR_NAME))
}
