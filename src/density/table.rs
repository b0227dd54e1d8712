//! Density bucket table
//!
//! Every factor is a multiple of 1/8 so it is stored exactly as a count of eighths;
//! xxxhdpi (the 4x reference) is 8/8.

use crate::io::error::{DrawableError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed Android screen-density classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Density {
    /// 1x, the baseline bucket
    Mdpi,
    /// 1.5x
    Hdpi,
    /// 2x
    Xhdpi,
    /// 3x
    Xxhdpi,
    /// 4x, the density source images are assumed to have
    Xxxhdpi,
}

impl Density {
    /// All buckets, lowest to highest
    pub const ALL: [Self; 5] = [
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    /// The density the source image is assumed to be authored at
    pub const BASE: Self = Self::Xxxhdpi;

    /// Identifier used on the command line and in directory names
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    // Multiplier relative to mdpi, times two
    const fn eighths(self) -> u32 {
        match self {
            Self::Mdpi => 2,
            Self::Hdpi => 3,
            Self::Xhdpi => 4,
            Self::Xxhdpi => 6,
            Self::Xxxhdpi => 8,
        }
    }

    /// Scale factor of this bucket relative to the base density
    pub const fn factor(self) -> DensityFactor {
        DensityFactor {
            density: self,
            eighths: self.eighths(),
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Density {
    type Err = DrawableError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|density| density.identifier() == s)
            .ok_or_else(|| DrawableError::UnknownDensity {
                identifier: s.to_string(),
            })
    }
}

/// Immutable scale factor of a density bucket, in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityFactor {
    density: Density,
    eighths: u32,
}

impl DensityFactor {
    /// The bucket this factor belongs to
    pub const fn density(&self) -> Density {
        self.density
    }

    /// Identifier of the bucket this factor belongs to
    pub const fn identifier(&self) -> &'static str {
        self.density.identifier()
    }

    /// Numerator of the factor over a denominator of 8
    pub const fn eighths(&self) -> u32 {
        self.eighths
    }

    /// The factor as a float; exact, since every factor is a multiple of 1/8
    pub fn value(&self) -> f64 {
        f64::from(self.eighths) / 8.0
    }
}

/// Look up the scale factor for a density identifier
///
/// # Errors
///
/// Returns [`DrawableError::UnknownDensity`] if the identifier is not one of
/// `mdpi`, `hdpi`, `xhdpi`, `xxhdpi` or `xxxhdpi` (matched exactly)
pub fn factor_for(identifier: &str) -> Result<DensityFactor> {
    identifier.parse::<Density>().map(Density::factor)
}
