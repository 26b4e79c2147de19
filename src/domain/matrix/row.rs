//! MatrixRow - one static fact for a (component, technology) pair.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Component, Level, Technology};

/// Estimates for deploying one component on one technology.
///
/// # Invariants
///
/// - `price` is a monthly USD figure, zero for not-applicable pairs
/// - `time_to_market_days` is zero for not-applicable pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub component: Component,
    pub technology: Technology,
    pub cost: Level,
    pub price: u32,
    pub time_to_market: Level,
    pub time_to_market_days: u32,
    pub complexity: Level,
}

impl MatrixRow {
    /// Creates a row with all fields.
    pub const fn new(
        component: Component,
        technology: Technology,
        cost: Level,
        price: u32,
        time_to_market: Level,
        time_to_market_days: u32,
        complexity: Level,
    ) -> Self {
        Self {
            component,
            technology,
            cost,
            price,
            time_to_market,
            time_to_market_days,
            complexity,
        }
    }

    /// Creates the row for a pair that cannot be deployed.
    pub const fn not_applicable(component: Component, technology: Technology) -> Self {
        Self::new(
            component,
            technology,
            Level::NotApplicable,
            0,
            Level::NotApplicable,
            0,
            Level::NotApplicable,
        )
    }

    /// Returns the lookup key.
    pub fn key(&self) -> (Component, Technology) {
        (self.component, self.technology)
    }

    /// Returns true if every label is the not-applicable marker.
    pub fn is_not_applicable(&self) -> bool {
        self.cost.is_not_applicable()
            && self.time_to_market.is_not_applicable()
            && self.complexity.is_not_applicable()
    }
}
