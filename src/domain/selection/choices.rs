//! Selection - the technology chosen for every component.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::foundation::{Component, Technology, ValidationError};

/// A total mapping from component to technology.
///
/// # Invariants
///
/// - Every component has exactly one technology
/// - Every entry is allowed for its component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    entries: [Technology; Component::COUNT],
}

impl Selection {
    /// Every component on the baseline technology.
    pub fn baseline() -> Self {
        Self {
            entries: [Technology::BASELINE; Component::COUNT],
        }
    }

    /// Every component on `technology`, except that storage falls back to the
    /// baseline when `technology` is the vendor-managed option.
    pub fn uniform(technology: Technology) -> Self {
        let mut entries = [technology; Component::COUNT];
        if technology.is_vendor_managed() {
            entries[Component::DataStorage.order_index()] = Technology::BASELINE;
        }
        Self { entries }
    }

    /// Returns the technology selected for a component.
    pub fn get(&self, component: Component) -> Technology {
        self.entries[component.order_index()]
    }

    /// Replaces one component's technology, returning the previous one.
    ///
    /// # Errors
    ///
    /// - `DisallowedPairing` if the technology is not allowed for the component
    pub fn set(
        &mut self,
        component: Component,
        technology: Technology,
    ) -> Result<Technology, ValidationError> {
        component.ensure_allows(technology)?;
        let slot = &mut self.entries[component.order_index()];
        Ok(std::mem::replace(slot, technology))
    }

    /// Iterates (component, technology) pairs in canonical component order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, Technology)> + '_ {
        Component::all().iter().map(move |c| (*c, self.get(*c)))
    }

    /// Returns true if every component is on the same technology.
    pub fn is_uniform(&self) -> bool {
        self.entries.iter().all(|t| *t == self.entries[0])
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::baseline()
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Component::COUNT))?;
        for (component, technology) in self.iter() {
            map.serialize_entry(&component, &technology)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_puts_every_component_on_aws() {
        let selection = Selection::baseline();
        for (_, technology) in selection.iter() {
            assert_eq!(technology, Technology::AwsManaged);
        }
        assert!(selection.is_uniform());
    }

    #[test]
    fn set_replaces_only_that_component() {
        let mut selection = Selection::baseline();
        let previous = selection
            .set(Component::MlTraining, Technology::GcpManaged)
            .unwrap();

        assert_eq!(previous, Technology::AwsManaged);
        assert_eq!(selection.get(Component::MlTraining), Technology::GcpManaged);
        assert_eq!(selection.get(Component::MlServing), Technology::AwsManaged);
        assert!(!selection.is_uniform());
    }

    #[test]
    fn set_rejects_vendor_managed_storage() {
        let mut selection = Selection::baseline();
        let result = selection.set(Component::DataStorage, Technology::DatabricksManaged);

        assert!(result.is_err());
        assert_eq!(selection, Selection::baseline());
    }

    #[test]
    fn uniform_vendor_managed_keeps_storage_on_baseline() {
        let selection = Selection::uniform(Technology::DatabricksManaged);
        assert_eq!(selection.get(Component::DataStorage), Technology::AwsManaged);
        assert_eq!(selection.get(Component::DataIngestion), Technology::DatabricksManaged);
    }

    #[test]
    fn iter_follows_canonical_order() {
        let components: Vec<_> = Selection::baseline().iter().map(|(c, _)| c).collect();
        assert_eq!(components, Component::all().to_vec());
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mut selection = Selection::baseline();
        selection
            .set(Component::DataStorage, Technology::SelfHosted)
            .unwrap();
        let json = serde_json::to_string(&selection).unwrap();
        assert!(json.starts_with("{\"data_storage\":\"self_hosted\",\"data_ingestion\":\"aws_managed\""));
    }
}
