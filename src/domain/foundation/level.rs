//! Qualitative level labels for cost, time-to-market and complexity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A qualitative estimate. `NotApplicable` marks pairs that cannot be deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    NotApplicable,
    Low,
    Moderate,
    High,
}

/// Display tone for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Neutral,
}

impl Level {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Level::NotApplicable => "-",
            Level::Low => "Low",
            Level::Moderate => "Moderate",
            Level::High => "High",
        }
    }

    /// Returns the numeric score used when summing labels across components.
    pub fn score(&self) -> u32 {
        match self {
            Level::NotApplicable => 0,
            Level::Low => 1,
            Level::Moderate => 2,
            Level::High => 3,
        }
    }

    /// Returns the display tone.
    pub fn tone(&self) -> Tone {
        match self {
            Level::Low => Tone::Green,
            Level::Moderate => Tone::Yellow,
            Level::High => Tone::Red,
            Level::NotApplicable => Tone::Neutral,
        }
    }

    /// Returns true if this is the not-applicable marker.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Level::NotApplicable)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
