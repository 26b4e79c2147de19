//! Provider Mix Analyzer - detects selections that span managed-cloud providers.

use crate::domain::foundation::{CloudProvider, Component};
use crate::domain::selection::Selection;

/// Tally of managed-cloud providers across a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProviderTally {
    /// (provider, count) in order of first appearance
    counts: Vec<(CloudProvider, usize)>,
    total: usize,
}

impl ProviderTally {
    fn of(selection: &Selection) -> Self {
        let mut counts: Vec<(CloudProvider, usize)> = Vec::with_capacity(3);
        let mut total = 0;

        for provider in selection.iter().filter_map(|(_, t)| t.cloud_provider()) {
            total += 1;
            match counts.iter_mut().find(|(p, _)| *p == provider) {
                Some((_, count)) => *count += 1,
                None => counts.push((provider, 1)),
            }
        }

        Self { counts, total }
    }

    /// Provider with the highest count. Ties go to the provider that appeared
    /// first in canonical component order.
    fn majority(&self) -> Option<CloudProvider> {
        let max = self.counts.iter().map(|(_, c)| *c).max()?;
        self.counts
            .iter()
            .find(|(_, c)| *c == max)
            .map(|(p, _)| *p)
    }
}

/// Managed-cloud provider mix analysis.
pub struct ProviderMixAnalyzer;

impl ProviderMixAnalyzer {
    /// Finds the provider that breaks an otherwise single-provider selection.
    ///
    /// # Algorithm
    /// Only components on a managed-cloud provider take part; Databricks
    /// Managed and Self-Hosted are provider-agnostic. The majority provider is
    /// the one with the highest count. The result is the first provider, in
    /// canonical component order, that differs from the majority.
    ///
    /// # Edge Cases
    /// - Fewer than two provider-bound components: `None`
    /// - One provider everywhere: `None`
    /// - Tied counts: the provider seen first wins the majority
    pub fn find_odd_provider_out(selection: &Selection) -> Option<CloudProvider> {
        let tally = ProviderTally::of(selection);
        if tally.total < 2 {
            return None;
        }

        let majority = tally.majority()?;
        selection
            .iter()
            .filter_map(|(_, t)| t.cloud_provider())
            .find(|p| *p != majority)
    }

    /// Returns every component whose provider differs from the majority.
    ///
    /// Empty whenever [`Self::find_odd_provider_out`] returns `None`.
    pub fn flagged_components(selection: &Selection) -> Vec<Component> {
        let tally = ProviderTally::of(selection);
        if tally.total < 2 {
            return Vec::new();
        }

        let Some(majority) = tally.majority() else {
            return Vec::new();
        };

        selection
            .iter()
            .filter(|(_, t)| matches!(t.cloud_provider(), Some(p) if p != majority))
            .map(|(c, _)| c)
            .collect()
    }

    /// Returns the distinct providers in use, in order of first appearance.
    pub fn providers_in_use(selection: &Selection) -> Vec<CloudProvider> {
        ProviderTally::of(selection)
            .counts
            .into_iter()
            .map(|(p, _)| p)
            .collect()
    }
}
