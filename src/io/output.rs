//! Output directory layout: `<root>/drawable-<density>/<base>.png`

use crate::density::Density;
use crate::io::configuration::{DIRECTORY_PREFIX, OUTPUT_EXTENSION};
use crate::io::error::{Result, file_system, invalid_request};
use std::path::{Path, PathBuf};

/// Directory holding the drawables of one density
pub fn density_directory(output_root: &Path, density: Density) -> PathBuf {
    output_root.join(format!("{DIRECTORY_PREFIX}{density}"))
}

/// Full path of the drawable written for one density
pub fn output_file_path(output_root: &Path, density: Density, base_filename: &str) -> PathBuf {
    density_directory(output_root, density).join(format!("{base_filename}.{OUTPUT_EXTENSION}"))
}

/// Check that a base filename names a single file inside the density directory
///
/// # Errors
///
/// Returns [`crate::DrawableError::InvalidRequest`] if the name is empty or
/// contains a path separator of the current platform
pub fn check_base_filename(base_filename: &str) -> Result<()> {
    if base_filename.is_empty() {
        return Err(invalid_request(&"base filename must not be empty"));
    }
    if base_filename.chars().any(std::path::is_separator) {
        return Err(invalid_request(&format!(
            "base filename '{base_filename}' must not contain a path separator"
        )));
    }
    Ok(())
}

/// Create the density directory and any missing ancestors
///
/// An existing directory is not an error.
///
/// # Errors
///
/// Returns [`crate::DrawableError::FileSystem`] if the directory cannot be created,
/// e.g. because a file already occupies the path
pub fn ensure_density_directory(output_root: &Path, density: Density) -> Result<PathBuf> {
    let directory = density_directory(output_root, density);
    std::fs::create_dir_all(&directory)
        .map_err(|e| file_system(&directory, "create directory", e))?;
    Ok(directory)
}

/// Reset the output root before a run
///
/// Only the default output root is ever removed; any other path is left alone.
/// Returns whether a previous default output tree was deleted.
///
/// # Errors
///
/// Returns [`crate::DrawableError::FileSystem`] if the default root exists but
/// cannot be removed
pub fn prepare_output_root(output_root: &Path, default_output_root: &Path) -> Result<bool> {
    if output_root != default_output_root || !output_root.exists() {
        return Ok(false);
    }

    tracing::info!(path = %output_root.display(), "clearing default output directory");
    std::fs::remove_dir_all(output_root)
        .map_err(|e| file_system(output_root, "clear output directory", e))?;
    Ok(true)
}

/// Output file name for an input path: its file stem
///
/// # Errors
///
/// Returns [`crate::DrawableError::InvalidRequest`] if the path has no usable
/// file stem
pub fn base_filename(input_path: &Path) -> Result<String> {
    input_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| {
            invalid_request(&format!(
                "cannot derive an output name from '{}'",
                input_path.display()
            ))
        })
}
