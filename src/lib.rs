//! Lakehouse Advisor - Selection aggregation for lakehouse architecture planning
//!
//! This crate holds the per-component technology selections of a lakehouse
//! design, resolves them against a reference table of cost, time-to-market,
//! and complexity estimates, and derives totals, scaled price projections, and
//! mixed-cloud warnings.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
