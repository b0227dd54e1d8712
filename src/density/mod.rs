//! Android density buckets and their scale factors relative to xxxhdpi

/// Target dimension computation with ties-to-even rounding and a 1px floor
pub mod scaling;
/// Fixed table of the five density buckets
pub mod table;

pub use table::{Density, DensityFactor, factor_for};
