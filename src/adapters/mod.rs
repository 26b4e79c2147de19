//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to its data sources:
//! - `dataset` - Reference dataset implementations (static, in-memory)

pub mod dataset;

pub use dataset::StaticMatrix;
