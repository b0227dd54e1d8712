//! Target dimension computation
//!
//! Dimensions are scaled in integer arithmetic. Halfway cases round to the
//! nearest even integer, so `37.5 -> 38` and `2.5 -> 2`. Results are clamped to
//! [`MIN_DIMENSION`] so even an empty source produces a 1px wide output.

use crate::density::DensityFactor;
use crate::io::configuration::MIN_DIMENSION;

/// Scale a single dimension by `eighths / 8`, rounding ties to even
pub const fn round_scaled(dimension: u32, eighths: u32) -> u32 {
    let scaled = dimension as u64 * eighths as u64;
    let quotient = scaled / 8;
    let remainder = scaled % 8;
    let rounded = if remainder > 4 || (remainder == 4 && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    // eighths never exceeds 8, so the result never exceeds the input
    if rounded > u32::MAX as u64 {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Scale a single dimension and clamp it to the minimum output size
pub const fn scale_dimension(dimension: u32, factor: &DensityFactor) -> u32 {
    let rounded = round_scaled(dimension, factor.eighths());
    if rounded < MIN_DIMENSION {
        MIN_DIMENSION
    } else {
        rounded
    }
}

/// Target `(width, height)` of a source of the given size at `factor`
pub const fn target_dimensions(width: u32, height: u32, factor: &DensityFactor) -> (u32, u32) {
    (
        scale_dimension(width, factor),
        scale_dimension(height, factor),
    )
}
