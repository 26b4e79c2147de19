//! DashboardSession - owns one selection store and keeps its aggregated view current.
//!
//! Every mutation is applied to a copy of the store, re-aggregated, and only
//! committed when both steps succeed.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::adapters::StaticMatrix;
use crate::domain::analysis::Aggregator;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::foundation::{Component, DomainError, Technology};
use crate::domain::selection::{SelectionSnapshot, SelectionStore};
use crate::ports::ReferenceDataset;

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardCommand {
    SetSelection {
        component: Component,
        technology: Technology,
    },
    BulkSet {
        technology: Technology,
    },
    SetScalingFactor {
        multiplier: u32,
    },
    Reset,
}

/// One user's dashboard state.
pub struct DashboardSession {
    dataset: Arc<dyn ReferenceDataset>,
    store: SelectionStore,
    view: DashboardSnapshot,
}

impl DashboardSession {
    /// Creates a session over a dataset.
    ///
    /// # Errors
    ///
    /// - `DataIntegrity` if the dataset misses any allowed pair
    pub fn new(dataset: Arc<dyn ReferenceDataset>) -> Result<Self, DomainError> {
        Aggregator::validate_coverage(dataset.as_ref())?;

        let store = SelectionStore::new();
        let view = Aggregator::aggregate(&store.snapshot(), dataset.as_ref())?;

        Ok(Self {
            dataset,
            store,
            view,
        })
    }

    /// Creates a session over the compiled-in lakehouse table.
    pub fn with_static_matrix() -> Result<Self, DomainError> {
        Self::new(StaticMatrix::lakehouse())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the current aggregated view.
    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.view
    }

    /// Returns the raw store state.
    pub fn selection_state(&self) -> SelectionSnapshot {
        self.store.snapshot()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Selects a technology for one component.
    pub fn set_selection(
        &mut self,
        component: Component,
        technology: Technology,
    ) -> Result<&DashboardSnapshot, DomainError> {
        self.mutate("set_selection", |store| {
            store.set_selection(component, technology).map(|_| ())
        })?;
        debug!(component = %component, technology = %technology, "Selection changed");
        Ok(&self.view)
    }

    /// Selects a technology for one component, both given by name.
    pub fn set_selection_by_name(
        &mut self,
        component: &str,
        technology: &str,
    ) -> Result<&DashboardSnapshot, DomainError> {
        self.mutate("set_selection", |store| {
            store.set_selection_by_name(component, technology).map(|_| ())
        })?;
        debug!(component, technology, "Selection changed");
        Ok(&self.view)
    }

    /// Sets every component to one technology.
    pub fn bulk_set(&mut self, technology: Technology) -> Result<&DashboardSnapshot, DomainError> {
        self.mutate("bulk_set", |store| {
            store.bulk_set(technology);
            Ok(())
        })?;
        debug!(technology = %technology, "All components set");
        Ok(&self.view)
    }

    /// Sets every component to one technology, given by name.
    pub fn bulk_set_by_name(&mut self, technology: &str) -> Result<&DashboardSnapshot, DomainError> {
        self.mutate("bulk_set", |store| store.bulk_set_by_name(technology))?;
        debug!(technology, "All components set");
        Ok(&self.view)
    }

    /// Replaces the scaling factor.
    pub fn set_scaling_factor(&mut self, multiplier: u32) -> Result<&DashboardSnapshot, DomainError> {
        self.mutate("set_scaling_factor", |store| {
            store.set_scaling_factor(multiplier).map(|_| ())
        })?;
        debug!(multiplier, scaled_price = self.view.scaled_price, "Scaling factor changed");
        Ok(&self.view)
    }

    /// Restores default selections and scaling factor.
    pub fn reset(&mut self) -> Result<&DashboardSnapshot, DomainError> {
        self.mutate("reset", |store| {
            store.reset();
            Ok(())
        })?;
        debug!("Selections reset");
        Ok(&self.view)
    }

    /// Dispatches a forwarded user action.
    pub fn apply(&mut self, command: DashboardCommand) -> Result<&DashboardSnapshot, DomainError> {
        match command {
            DashboardCommand::SetSelection {
                component,
                technology,
            } => self.set_selection(component, technology),
            DashboardCommand::BulkSet { technology } => self.bulk_set(technology),
            DashboardCommand::SetScalingFactor { multiplier } => {
                self.set_scaling_factor(multiplier)
            }
            DashboardCommand::Reset => self.reset(),
        }
    }

    /// Applies `change` to a copy of the store and commits it with its view.
    fn mutate<F>(&mut self, operation: &'static str, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut SelectionStore) -> Result<(), DomainError>,
    {
        let mut next = self.store.clone();
        let outcome = change(&mut next)
            .and_then(|()| Aggregator::aggregate(&next.snapshot(), self.dataset.as_ref()));

        let view = match outcome {
            Ok(view) => view,
            Err(err) => {
                warn!(operation, code = %err.code, error = %err.message, "Mutation rejected");
                return Err(err);
            }
        };

        if view.odd_provider.is_some() && view.odd_provider != self.view.odd_provider {
            info!(
                odd_provider = ?view.odd_provider,
                flagged = view.flagged_components.len(),
                "Mixed managed-cloud providers selected"
            );
        }

        self.store = next;
        self.view = view;
        Ok(())
    }
}

impl std::fmt::Debug for DashboardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardSession")
            .field("dataset_rows", &self.dataset.len())
            .field("store", &self.store)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CloudProvider, ErrorCode};
    use crate::domain::matrix::LAKEHOUSE_MATRIX;

    fn session() -> DashboardSession {
        DashboardSession::with_static_matrix().unwrap()
    }

    #[test]
    fn new_session_shows_baseline_view() {
        let session = session();
        let view = session.snapshot();

        assert_eq!(view.totals.price, 313);
        assert_eq!(view.totals.time_to_market_days, 61);
        assert_eq!(view.scaled_price, 313);
        assert_eq!(view.odd_provider, None);
    }

    #[test]
    fn new_rejects_dataset_with_gap() {
        let gappy = StaticMatrix::from_rows(
            LAKEHOUSE_MATRIX
                .iter()
                .copied()
                .filter(|r| r.key() != (Component::DataIngestion, Technology::SelfHosted)),
        )
        .unwrap();

        let err = DashboardSession::new(Arc::new(gappy)).unwrap_err();

        assert_eq!(err.code, ErrorCode::DataIntegrity);
    }

    #[test]
    fn set_selection_recomputes_view() {
        let mut session = session();
        let view = session
            .set_selection(Component::MlServing, Technology::AzureManaged)
            .unwrap();

        assert_eq!(view.odd_provider, Some(CloudProvider::Azure));
        assert_eq!(view.flagged_components, vec![Component::MlServing]);
    }

    #[test]
    fn rejected_selection_keeps_previous_view() {
        let mut session = session();
        session.set_scaling_factor(2).unwrap();
        let before = session.snapshot().clone();

        let err = session
            .set_selection(Component::DataStorage, Technology::DatabricksManaged)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(session.snapshot(), &before);
    }

    #[test]
    fn scaling_factor_updates_scaled_price_only() {
        let mut session = session();
        let view = session.set_scaling_factor(10).unwrap();

        assert_eq!(view.totals.price, 313);
        assert_eq!(view.scaled_price, 3130);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut session = session();

        session
            .apply(DashboardCommand::BulkSet {
                technology: Technology::GcpManaged,
            })
            .unwrap();
        assert_eq!(session.snapshot().totals.price, 295);

        session.apply(DashboardCommand::Reset).unwrap();
        assert_eq!(session.snapshot().totals.price, 313);
    }

    #[test]
    fn command_deserializes_from_tagged_json() {
        let json = r#"{"type":"set_selection","component":"data_storage","technology":"self_hosted"}"#;
        let command: DashboardCommand = serde_json::from_str(json).unwrap();

        assert_eq!(
            command,
            DashboardCommand::SetSelection {
                component: Component::DataStorage,
                technology: Technology::SelfHosted,
            }
        );
    }

    #[test]
    fn command_with_unknown_technology_fails_to_deserialize() {
        let json = r#"{"type":"bulk_set","technology":"mainframe"}"#;
        assert!(serde_json::from_str::<DashboardCommand>(json).is_err());
    }
}
