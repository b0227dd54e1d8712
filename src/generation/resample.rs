//! Lanczos resampling to exact target dimensions

use crate::io::configuration::RESAMPLE_FILTER;
use image::{DynamicImage, GenericImageView};

/// Resample `source` to exactly `width` x `height`
///
/// No cropping or letterboxing is applied; the aspect ratio follows the requested
/// dimensions. A source already at the target size is copied unchanged, and a
/// source with no pixels yields a transparent image of the requested size.
pub fn resample(source: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (source_width, source_height) = source.dimensions();

    if source_width == 0 || source_height == 0 {
        return DynamicImage::new_rgba8(width, height);
    }

    if (source_width, source_height) == (width, height) {
        return source.clone();
    }

    source.resize_exact(width, height, RESAMPLE_FILTER)
}
