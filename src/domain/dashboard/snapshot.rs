use serde::Serialize;

use crate::domain::foundation::{CloudProvider, Component, ScalingFactor};
use crate::domain::matrix::MatrixRow;
use crate::domain::selection::Selection;

/// The aggregated view - everything derived from one selection state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Current choice per component
    pub selections: Selection,
    pub scaling_factor: ScalingFactor,

    /// One row per component, canonical order
    pub resolved_rows: Vec<MatrixRow>,

    pub totals: MetricTotals,

    /// `totals.price * scaling_factor`
    pub scaled_price: u64,

    /// Minority managed-cloud provider, if providers are mixed
    pub odd_provider: Option<CloudProvider>,

    /// Components whose provider differs from the majority
    pub flagged_components: Vec<Component>,

    /// Per-component share of the monthly price
    pub cost_breakdown: Vec<CostShare>,

    /// Summed qualitative labels
    pub label_scores: LabelScores,
}

impl DashboardSnapshot {
    /// Returns true if more than one managed-cloud provider is selected.
    pub fn has_mixed_providers(&self) -> bool {
        self.odd_provider.is_some()
    }

    /// Warning to show when providers are mixed.
    pub fn mixed_provider_warning(&self) -> Option<&'static str> {
        self.has_mixed_providers().then_some(MIXED_PROVIDER_WARNING)
    }

    /// Returns true if the component's selector should be highlighted.
    pub fn is_flagged(&self, component: Component) -> bool {
        self.flagged_components.contains(&component)
    }

    /// Returns the resolved row for a component.
    pub fn row(&self, component: Component) -> Option<&MatrixRow> {
        self.resolved_rows.iter().find(|r| r.component == component)
    }
}

/// Shown whenever more than one managed-cloud provider is selected.
pub const MIXED_PROVIDER_WARNING: &str =
    "Multi-cloud setup will lead to increased complexity and higher operational costs";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTotals {
    /// Monthly USD
    pub price: u32,
    pub time_to_market_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostShare {
    pub component: Component,
    pub price: u32,
    /// Percent of the total, one decimal place
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelScores {
    pub cost: u32,
    pub time_to_market: u32,
    pub complexity: u32,
}

impl LabelScores {
    /// Highest possible score per axis: every component rated High.
    pub const MAX_PER_AXIS: u32 = 3 * Component::COUNT as u32;
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;
