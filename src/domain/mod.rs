//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Closed enumerations, value objects, errors
//! - `matrix` - The compiled-in estimate table and vendor credit programs
//! - `selection` - Per-component technology choices and their store
//! - `analysis` - Pure aggregation services (totals, scaling, provider mix)
//! - `dashboard` - The aggregated view handed to the presentation layer

pub mod analysis;
pub mod dashboard;
pub mod foundation;
pub mod matrix;
pub mod selection;
