//! Analysis Module - Pure domain services for selection aggregation.
//!
//! # Components
//!
//! - `Aggregator` - Row resolution, totals, scaling, breakdowns, dataset coverage
//! - `ProviderMixAnalyzer` - Majority vote over managed-cloud providers
//!
//! All functions are pure and stateless. They take domain objects and the
//! reference dataset port as input and return computed results.

mod aggregator;
mod provider_mix;

pub use aggregator::Aggregator;
pub use provider_mix::ProviderMixAnalyzer;
