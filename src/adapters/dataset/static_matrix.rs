//! In-memory implementation of the ReferenceDataset port.
//!
//! Indexes a slice of rows by (component, technology). The compiled-in
//! lakehouse table is indexed once per process and shared.
//!
//! # Usage
//!
//! ```ignore
//! use lakehouse_advisor::adapters::dataset::StaticMatrix;
//!
//! // Production: the compiled-in table
//! let dataset = StaticMatrix::lakehouse();
//!
//! // Testing: a hand-built table
//! let dataset = StaticMatrix::from_rows(rows)?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::foundation::{Component, DomainError, Technology};
use crate::domain::matrix::{MatrixRow, LAKEHOUSE_MATRIX};
use crate::ports::ReferenceDataset;

static LAKEHOUSE: Lazy<Arc<StaticMatrix>> = Lazy::new(|| {
    Arc::new(StaticMatrix::index(LAKEHOUSE_MATRIX.iter().copied()))
});

/// A reference dataset held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticMatrix {
    rows: HashMap<(Component, Technology), MatrixRow>,
}

impl StaticMatrix {
    /// Returns the shared index over the compiled-in lakehouse table.
    pub fn lakehouse() -> Arc<StaticMatrix> {
        Arc::clone(&LAKEHOUSE)
    }

    /// Builds a dataset from arbitrary rows.
    ///
    /// # Errors
    ///
    /// - `DataIntegrity` if two rows share a (component, technology) key
    pub fn from_rows(rows: impl IntoIterator<Item = MatrixRow>) -> Result<Self, DomainError> {
        let mut index = HashMap::new();
        for row in rows {
            if index.insert(row.key(), row).is_some() {
                return Err(DomainError::data_integrity(format!(
                    "Duplicate row for {} / {}",
                    row.component, row.technology
                ))
                .with_detail("component", row.component.id())
                .with_detail("technology", row.technology.id()));
            }
        }
        Ok(Self { rows: index })
    }

    // The compiled-in table has unique keys (checked by its own tests).
    fn index(rows: impl Iterator<Item = MatrixRow>) -> Self {
        Self {
            rows: rows.map(|row| (row.key(), row)).collect(),
        }
    }
}

impl ReferenceDataset for StaticMatrix {
    fn lookup(&self, component: Component, technology: Technology) -> Option<&MatrixRow> {
        self.rows.get(&(component, technology))
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Level};

    fn row(component: Component, technology: Technology, price: u32) -> MatrixRow {
        MatrixRow::new(
            component,
            technology,
            Level::Low,
            price,
            Level::Low,
            1,
            Level::Low,
        )
    }

    #[test]
    fn lakehouse_indexes_every_row() {
        let dataset = StaticMatrix::lakehouse();
        assert_eq!(dataset.len(), LAKEHOUSE_MATRIX.len());
    }

    #[test]
    fn lakehouse_is_shared() {
        let a = StaticMatrix::lakehouse();
        let b = StaticMatrix::lakehouse();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn lookup_finds_known_row() {
        let dataset = StaticMatrix::lakehouse();
        let found = dataset
            .lookup(Component::MlServing, Technology::GcpManaged)
            .unwrap();
        assert_eq!(found.price, 90);
        assert_eq!(found.time_to_market_days, 7);
    }

    #[test]
    fn from_rows_rejects_duplicate_keys() {
        let err = StaticMatrix::from_rows(vec![
            row(Component::DataStorage, Technology::AwsManaged, 10),
            row(Component::DataStorage, Technology::AwsManaged, 20),
        ])
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::DataIntegrity);
        assert_eq!(err.details.get("component"), Some(&"data_storage".to_string()));
    }

    #[test]
    fn from_rows_accepts_unique_keys() {
        let dataset = StaticMatrix::from_rows(vec![
            row(Component::DataStorage, Technology::AwsManaged, 10),
            row(Component::DataStorage, Technology::GcpManaged, 20),
        ])
        .unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn default_is_empty() {
        assert!(StaticMatrix::default().is_empty());
    }
}
