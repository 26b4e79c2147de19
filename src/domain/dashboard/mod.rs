pub mod snapshot;

pub use snapshot::{
    CostShare, DashboardSnapshot, LabelScores, MetricTotals, MIXED_PROVIDER_WARNING,
};
