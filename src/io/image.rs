//! Source image decoding and PNG export

use crate::io::configuration::ACCEPTED_INPUT_EXTENSIONS;
use crate::io::error::{DrawableError, Result, file_system};
use image::{DynamicImage, ImageError, ImageFormat};
use std::path::Path;

/// Whether the path has one of the accepted raster image extensions
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_INPUT_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Open and decode the source image
///
/// The format is guessed from the file contents, not the extension.
///
/// # Errors
///
/// Returns [`DrawableError::ImageLoad`] if the file cannot be opened or is not a
/// decodable image
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    image::ImageReader::open(path)
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.with_guessed_format().map_err(ImageError::IoError))
        .and_then(|reader| reader.decode())
        .map_err(|e| DrawableError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Write `image` to `path` as PNG, replacing any existing file
///
/// # Errors
///
/// Returns:
/// - [`DrawableError::FileSystem`] if the file cannot be created or written
/// - [`DrawableError::ImageExport`] if the image cannot be encoded as PNG
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(source) => file_system(path, "write image", source),
            other => DrawableError::ImageExport {
                path: path.to_path_buf(),
                source: other,
            },
        })
}
