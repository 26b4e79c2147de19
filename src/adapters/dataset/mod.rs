//! Dataset adapters - implementations of the ReferenceDataset port.
//!
//! - `StaticMatrix` - In-memory index over compiled-in or hand-built rows

mod static_matrix;

pub use static_matrix::StaticMatrix;
