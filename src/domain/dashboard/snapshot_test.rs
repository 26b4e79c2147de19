#[cfg(test)]
mod tests {
    use crate::domain::dashboard::snapshot::{
        DashboardSnapshot, LabelScores, MetricTotals, MIXED_PROVIDER_WARNING,
    };
    use crate::domain::foundation::{CloudProvider, Component, ScalingFactor};
    use crate::domain::matrix::LAKEHOUSE_MATRIX;
    use crate::domain::selection::Selection;

    fn snapshot(odd_provider: Option<CloudProvider>, flagged: Vec<Component>) -> DashboardSnapshot {
        DashboardSnapshot {
            selections: Selection::baseline(),
            scaling_factor: ScalingFactor::Current,
            resolved_rows: vec![LAKEHOUSE_MATRIX[0]],
            totals: MetricTotals {
                price: 15,
                time_to_market_days: 4,
            },
            scaled_price: 15,
            odd_provider,
            flagged_components: flagged,
            cost_breakdown: vec![],
            label_scores: LabelScores::default(),
        }
    }

    #[test]
    fn test_snapshot_serializes_camel_case_fields() {
        let json = serde_json::to_string(&snapshot(None, vec![])).unwrap();

        assert!(json.contains("\"resolvedRows\""));
        assert!(json.contains("\"scaledPrice\":15"));
        assert!(json.contains("\"timeToMarketDays\":4"));
        assert!(json.contains("\"oddProvider\":null"));
        assert!(json.contains("\"scalingFactor\":1"));
    }

    #[test]
    fn test_no_warning_without_odd_provider() {
        let view = snapshot(None, vec![]);
        assert!(!view.has_mixed_providers());
        assert_eq!(view.mixed_provider_warning(), None);
    }

    #[test]
    fn test_warning_with_odd_provider() {
        let view = snapshot(Some(CloudProvider::Gcp), vec![Component::MlTraining]);
        assert!(view.has_mixed_providers());
        assert_eq!(view.mixed_provider_warning(), Some(MIXED_PROVIDER_WARNING));
        assert!(view.is_flagged(Component::MlTraining));
        assert!(!view.is_flagged(Component::DataStorage));
    }

    #[test]
    fn test_row_lookup_by_component() {
        let view = snapshot(None, vec![]);
        assert_eq!(view.row(Component::DataStorage).map(|r| r.price), Some(15));
        assert!(view.row(Component::DashboardsBi).is_none());
    }

    #[test]
    fn test_label_score_ceiling() {
        assert_eq!(LabelScores::MAX_PER_AXIS, 21);
    }
}
