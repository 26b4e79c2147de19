//! ScalingFactor presets for projecting cost at higher data volumes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A data-volume band, applied as a multiplier to the monthly price total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ScalingFactor {
    #[default]
    Current,
    Double,
    FiveFold,
    TenFold,
}

impl ScalingFactor {
    /// Returns all presets, smallest first.
    pub fn all() -> &'static [ScalingFactor] {
        &[
            ScalingFactor::Current,
            ScalingFactor::Double,
            ScalingFactor::FiveFold,
            ScalingFactor::TenFold,
        ]
    }

    /// Returns the multiplier applied to the price total.
    pub fn multiplier(&self) -> u32 {
        match self {
            ScalingFactor::Current => 1,
            ScalingFactor::Double => 2,
            ScalingFactor::FiveFold => 5,
            ScalingFactor::TenFold => 10,
        }
    }

    /// Looks up the preset for a multiplier.
    pub fn try_from_multiplier(multiplier: u32) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.multiplier() == multiplier)
            .ok_or_else(|| {
                ValidationError::not_a_preset(
                    multiplier,
                    Self::all().iter().map(ScalingFactor::multiplier).collect(),
                )
            })
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScalingFactor::Current => "Current volume",
            ScalingFactor::Double => "2x data volume",
            ScalingFactor::FiveFold => "5x data volume",
            ScalingFactor::TenFold => "10x data volume",
        }
    }
}

impl TryFrom<u32> for ScalingFactor {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from_multiplier(value)
    }
}

impl From<ScalingFactor> for u32 {
    fn from(factor: ScalingFactor) -> Self {
        factor.multiplier()
    }
}

impl fmt::Display for ScalingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.multiplier())
    }
}
