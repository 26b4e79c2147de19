//! Aggregator - resolves a selection against the reference dataset and
//! derives totals, projections, and breakdowns.

use tracing::debug;

use crate::domain::dashboard::{CostShare, DashboardSnapshot, LabelScores, MetricTotals};
use crate::domain::foundation::{Component, DomainError, ScalingFactor};
use crate::domain::matrix::MatrixRow;
use crate::domain::selection::{Selection, SelectionSnapshot};
use crate::ports::ReferenceDataset;

use super::ProviderMixAnalyzer;

/// Selection aggregation functions.
pub struct Aggregator;

impl Aggregator {
    /// Looks up the row for every component, in canonical order.
    ///
    /// # Errors
    /// - `DataIntegrity` if the dataset has no row for a selected pair
    pub fn resolve(
        selection: &Selection,
        dataset: &dyn ReferenceDataset,
    ) -> Result<Vec<MatrixRow>, DomainError> {
        selection
            .iter()
            .map(|(component, technology)| {
                dataset.lookup(component, technology).copied().ok_or_else(|| {
                    DomainError::data_integrity(format!(
                        "No dataset row for {} / {}",
                        component, technology
                    ))
                    .with_detail("component", component.id())
                    .with_detail("technology", technology.id())
                })
            })
            .collect()
    }

    /// Sums price and time-to-market days over the rows.
    ///
    /// Not-applicable rows contribute zero but are still counted.
    pub fn sum_metrics(rows: &[MatrixRow]) -> MetricTotals {
        rows.iter().fold(MetricTotals::default(), |acc, row| MetricTotals {
            price: acc.price + row.price,
            time_to_market_days: acc.time_to_market_days + row.time_to_market_days,
        })
    }

    /// Projects the monthly price at a larger data volume.
    pub fn scaled_price(total_price: u32, factor: ScalingFactor) -> u64 {
        u64::from(total_price) * u64::from(factor.multiplier())
    }

    /// Computes each row's share of the total price.
    ///
    /// # Edge Cases
    /// - Zero total: every share is 0.0
    pub fn cost_breakdown(rows: &[MatrixRow]) -> Vec<CostShare> {
        let total = Self::sum_metrics(rows).price;

        rows.iter()
            .map(|row| CostShare {
                component: row.component,
                price: row.price,
                percentage: share_percent(row.price, total),
            })
            .collect()
    }

    /// Sums the qualitative labels as scores (Low=1, Moderate=2, High=3).
    pub fn label_scores(rows: &[MatrixRow]) -> LabelScores {
        rows.iter().fold(LabelScores::default(), |acc, row| LabelScores {
            cost: acc.cost + row.cost.score(),
            time_to_market: acc.time_to_market + row.time_to_market.score(),
            complexity: acc.complexity + row.complexity.score(),
        })
    }

    /// Checks that every component has a row for every allowed technology.
    ///
    /// # Errors
    /// - `DataIntegrity` naming the first missing pair
    pub fn validate_coverage(dataset: &dyn ReferenceDataset) -> Result<(), DomainError> {
        for component in Component::all() {
            for technology in component.allowed_technologies() {
                if dataset.lookup(*component, *technology).is_none() {
                    return Err(DomainError::data_integrity(format!(
                        "Dataset does not cover {} / {}",
                        component, technology
                    ))
                    .with_detail("component", component.id())
                    .with_detail("technology", technology.id()));
                }
            }
        }

        debug!(rows = dataset.len(), "Reference dataset covers every allowed pair");
        Ok(())
    }

    /// Builds the full aggregated view for a store snapshot.
    ///
    /// # Errors
    /// - `DataIntegrity` if any selected pair is missing from the dataset
    pub fn aggregate(
        state: &SelectionSnapshot,
        dataset: &dyn ReferenceDataset,
    ) -> Result<DashboardSnapshot, DomainError> {
        let selection = &state.selection;
        let rows = Self::resolve(selection, dataset)?;
        let totals = Self::sum_metrics(&rows);

        Ok(DashboardSnapshot {
            selections: *selection,
            scaling_factor: state.scaling_factor,
            scaled_price: Self::scaled_price(totals.price, state.scaling_factor),
            odd_provider: ProviderMixAnalyzer::find_odd_provider_out(selection),
            flagged_components: ProviderMixAnalyzer::flagged_components(selection),
            cost_breakdown: Self::cost_breakdown(&rows),
            label_scores: Self::label_scores(&rows),
            totals,
            resolved_rows: rows,
        })
    }
}

/// Percent of `total`, rounded to one decimal place.
fn share_percent(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = f64::from(part) / f64::from(total) * 100.0;
    (percent * 10.0).round() / 10.0
}
