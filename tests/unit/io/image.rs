//! Tests for source decoding and PNG export

#[cfg(test)]
mod tests {
    use crate::{gradient, write_source};
    use drawablegen::DrawableError;
    use drawablegen::io::image::{is_supported_input, load_source, write_png};
    use image::{DynamicImage, GenericImageView};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests accepted extensions are matched case-insensitively
    // Verified by comparing extensions case-sensitively
    #[test]
    fn test_supported_inputs() {
        for name in ["a.png", "a.JPG", "a.jpeg", "a.Bmp", "a.gif", "a.webp"] {
            assert!(is_supported_input(Path::new(name)), "{name}");
        }
        for name in ["a.svg", "a.txt", "a", "png"] {
            assert!(!is_supported_input(Path::new(name)), "{name}");
        }
    }

    // Tests a written PNG decodes back with the same size
    // Verified by writing a fixed-size image
    #[test]
    fn test_load_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_source(temp_dir.path(), "source.png", 21, 13);

        let image = load_source(&path).unwrap();
        assert_eq!(image.dimensions(), (21, 13));
    }

    // Tests the format is detected from content, not the extension
    // Verified by decoding by extension only
    #[test]
    fn test_load_source_guesses_format() {
        let temp_dir = TempDir::new().unwrap();
        let png = write_source(temp_dir.path(), "source.png", 5, 7);
        let misnamed = temp_dir.path().join("source.jpg");
        fs::copy(&png, &misnamed).unwrap();

        assert_eq!(load_source(&misnamed).unwrap().dimensions(), (5, 7));
    }

    // Tests garbage input reports ImageLoad with the path
    // Verified by mapping decode errors to FileSystem
    #[test]
    fn test_load_source_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, [0u8, 1, 2, 3]).unwrap();

        match load_source(&path) {
            Err(DrawableError::ImageLoad { path: got, .. }) => assert_eq!(got, path),
            other => unreachable!("Expected ImageLoad, got {other:?}"),
        }
    }

    // Tests writing over an existing file replaces it
    // Verified by refusing to overwrite
    #[test]
    fn test_write_png_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.png");
        fs::write(&path, "old contents").unwrap();

        write_png(&gradient(3, 4), &path).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (3, 4));
    }

    // Tests an unwritable destination is a file system error
    // Verified by mapping every error to ImageExport
    #[test]
    fn test_write_png_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("occupied.png");
        fs::create_dir(&path).unwrap();

        assert!(matches!(
            write_png(&gradient(3, 4), &path),
            Err(DrawableError::FileSystem { .. })
        ));
    }

    // Tests an image PNG cannot represent is an export error, not a file system one
    // Verified by mapping every error to FileSystem
    #[test]
    fn test_write_png_unsupported_color_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("float.png");
        let float_image = DynamicImage::ImageRgb32F(gradient(4, 4).to_rgb32f());

        match write_png(&float_image, &path) {
            Err(DrawableError::ImageExport { path: got, .. }) => assert_eq!(got, path),
            other => unreachable!("Expected ImageExport, got {other:?}"),
        }
    }
}
