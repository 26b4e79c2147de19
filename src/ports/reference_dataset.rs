use crate::domain::foundation::{Component, Technology};
use crate::domain::matrix::MatrixRow;

/// Read-only port for the static estimate table.
///
/// Implementations are immutable for their whole lifetime, so one dataset can
/// back any number of sessions.
pub trait ReferenceDataset: Send + Sync {
    /// Looks up the row for a (component, technology) pair.
    ///
    /// Returns `None` when the dataset has no row for the pair.
    fn lookup(&self, component: Component, technology: Technology) -> Option<&MatrixRow>;

    /// Number of rows in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset holds no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Level;

    // Single-row dataset for testing the trait
    struct OneRow(MatrixRow);

    impl ReferenceDataset for OneRow {
        fn lookup(&self, component: Component, technology: Technology) -> Option<&MatrixRow> {
            (self.0.key() == (component, technology)).then_some(&self.0)
        }

        fn len(&self) -> usize {
            1
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let row = MatrixRow::new(
            Component::DataStorage,
            Technology::AwsManaged,
            Level::Low,
            15,
            Level::Low,
            4,
            Level::Low,
        );
        let dataset: Box<dyn ReferenceDataset> = Box::new(OneRow(row));

        assert_eq!(
            dataset.lookup(Component::DataStorage, Technology::AwsManaged),
            Some(&row)
        );
        assert!(dataset
            .lookup(Component::DataStorage, Technology::GcpManaged)
            .is_none());
        assert!(!dataset.is_empty());
    }
}
