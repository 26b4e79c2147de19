//! Application layer - the session facade the presentation layer talks to.
//!
//! The session orchestrates the selection store, the aggregator, and the
//! reference dataset port. It is synchronous: every call runs to completion.

mod dashboard_session;

pub use dashboard_session::{DashboardCommand, DashboardSession};
