//! Selection store - the session's mutable choices.
//!
//! The store owns the current [`Selection`] and [`ScalingFactor`]. It is an
//! ordinary owned value: every consumer creates its own, nothing is global.

use serde::Serialize;

use super::Selection;
use crate::domain::foundation::{Component, DomainError, ScalingFactor, Technology};

/// An immutable copy of the store's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub selection: Selection,
    pub scaling_factor: ScalingFactor,
}

/// Holds the technology choice per component plus the scaling factor.
///
/// # Invariants
///
/// - The selection is always total and only holds allowed pairings
/// - The scaling factor is always one of the presets
/// - A rejected mutation leaves the store unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selection: Selection,
    scaling_factor: ScalingFactor,
}

impl SelectionStore {
    /// Creates a store with default selections and the unit scaling factor.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the current scaling factor.
    pub fn scaling_factor(&self) -> ScalingFactor {
        self.scaling_factor
    }

    /// Returns an immutable copy of the current state.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selection: self.selection,
            scaling_factor: self.scaling_factor,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Selects a technology for one component, returning the previous one.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the technology is not allowed for the component
    pub fn set_selection(
        &mut self,
        component: Component,
        technology: Technology,
    ) -> Result<Technology, DomainError> {
        Ok(self.selection.set(component, technology)?)
    }

    /// Selects a technology for one component, both given by name.
    ///
    /// Accepts display names ("Data Storage") or snake_case ids ("data_storage").
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if either name is unknown or the pairing is disallowed
    pub fn set_selection_by_name(
        &mut self,
        component: &str,
        technology: &str,
    ) -> Result<Technology, DomainError> {
        let component: Component = component.parse()?;
        let technology: Technology = technology.parse()?;
        self.set_selection(component, technology)
    }

    /// Sets every component to `technology`.
    ///
    /// Storage cannot be vendor-managed, so bulk-setting to the vendor-managed
    /// option puts storage on the baseline technology instead.
    pub fn bulk_set(&mut self, technology: Technology) {
        self.selection = Selection::uniform(technology);
    }

    /// Bulk-sets by technology name.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the technology name is unknown
    pub fn bulk_set_by_name(&mut self, technology: &str) -> Result<(), DomainError> {
        let technology: Technology = technology.parse()?;
        self.bulk_set(technology);
        Ok(())
    }

    /// Replaces the scaling factor, returning the previous one.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the multiplier is not a preset
    pub fn set_scaling_factor(&mut self, multiplier: u32) -> Result<ScalingFactor, DomainError> {
        let factor = ScalingFactor::try_from_multiplier(multiplier)?;
        Ok(std::mem::replace(&mut self.scaling_factor, factor))
    }

    /// Restores default selections and scaling factor.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
