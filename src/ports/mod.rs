//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReferenceDataset` - Read-only lookup into the estimate table

mod reference_dataset;

pub use reference_dataset::ReferenceDataset;
