//! Component enum representing the 7 lakehouse architecture stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Technology, ValidationError};

/// The 7 stages of the reference lakehouse architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    DataStorage,
    DataIngestion,
    DataProcessing,
    MlTraining,
    MlServing,
    ExploratoryAnalysis,
    DashboardsBi,
}

impl Component {
    /// Number of components.
    pub const COUNT: usize = 7;

    /// Returns all components in canonical order.
    pub fn all() -> &'static [Component; Component::COUNT] {
        &[
            Component::DataStorage,
            Component::DataIngestion,
            Component::DataProcessing,
            Component::MlTraining,
            Component::MlServing,
            Component::ExploratoryAnalysis,
            Component::DashboardsBi,
        ]
    }

    /// Returns the 0-based index of this component in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            Component::DataStorage => 0,
            Component::DataIngestion => 1,
            Component::DataProcessing => 2,
            Component::MlTraining => 3,
            Component::MlServing => 4,
            Component::ExploratoryAnalysis => 5,
            Component::DashboardsBi => 6,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::DataStorage => "Data Storage",
            Component::DataIngestion => "Data Ingestion",
            Component::DataProcessing => "Data Processing (ETL/ELT)",
            Component::MlTraining => "Machine Learning Training",
            Component::MlServing => "Machine Learning Serving (Inference)",
            Component::ExploratoryAnalysis => "Exploratory Data Analysis",
            Component::DashboardsBi => "Dashboards / BI",
        }
    }

    /// Returns a shorter label for chart axes and legends.
    pub fn short_name(&self) -> &'static str {
        match self {
            Component::MlServing => "ML Serving",
            other => other.display_name(),
        }
    }

    /// Returns the snake_case identifier (matches the serde form).
    pub fn id(&self) -> &'static str {
        match self {
            Component::DataStorage => "data_storage",
            Component::DataIngestion => "data_ingestion",
            Component::DataProcessing => "data_processing",
            Component::MlTraining => "ml_training",
            Component::MlServing => "ml_serving",
            Component::ExploratoryAnalysis => "exploratory_analysis",
            Component::DashboardsBi => "dashboards_bi",
        }
    }

    /// Returns the technologies that may be selected for this component.
    ///
    /// Data Storage cannot be vendor-managed.
    pub fn allowed_technologies(&self) -> &'static [Technology] {
        match self {
            Component::DataStorage => &[
                Technology::AwsManaged,
                Technology::AzureManaged,
                Technology::GcpManaged,
                Technology::SelfHosted,
            ],
            _ => Technology::all(),
        }
    }

    /// Returns true if the technology may be selected for this component.
    pub fn allows(&self, technology: Technology) -> bool {
        self.allowed_technologies().contains(&technology)
    }

    /// Fails with `DisallowedPairing` unless the technology is allowed.
    pub fn ensure_allows(&self, technology: Technology) -> Result<(), ValidationError> {
        if self.allows(technology) {
            Ok(())
        } else {
            Err(ValidationError::disallowed_pairing(
                self.display_name(),
                technology.display_name(),
            ))
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Component {
    type Err = ValidationError;

    /// Accepts either the display name or the snake_case id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Component::all()
            .iter()
            .copied()
            .find(|c| c.display_name() == needle || c.id() == needle)
            .ok_or_else(|| ValidationError::unknown_value("component", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_7_components() {
        assert_eq!(Component::all().len(), 7);
    }

    #[test]
    fn order_index_matches_position_in_all() {
        for (idx, component) in Component::all().iter().enumerate() {
            assert_eq!(component.order_index(), idx);
        }
    }

    #[test]
    fn storage_disallows_vendor_managed() {
        assert!(!Component::DataStorage.allows(Technology::DatabricksManaged));
        assert_eq!(Component::DataStorage.allowed_technologies().len(), 4);
    }

    #[test]
    fn other_components_allow_every_technology() {
        for component in Component::all().iter().skip(1) {
            for technology in Technology::all() {
                assert!(component.allows(*technology), "{} / {}", component, technology);
            }
        }
    }

    #[test]
    fn ensure_allows_reports_the_pairing() {
        let err = Component::DataStorage
            .ensure_allows(Technology::DatabricksManaged)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::disallowed_pairing("Data Storage", "Databricks Managed")
        );
    }

    #[test]
    fn short_name_abbreviates_ml_serving_only() {
        assert_eq!(Component::MlServing.short_name(), "ML Serving");
        assert_eq!(Component::MlTraining.short_name(), "Machine Learning Training");
    }

    #[test]
    fn parses_display_names_and_ids() {
        assert_eq!(
            "Data Processing (ETL/ELT)".parse::<Component>().unwrap(),
            Component::DataProcessing
        );
        assert_eq!("dashboards_bi".parse::<Component>().unwrap(), Component::DashboardsBi);
    }

    #[test]
    fn rejects_unknown_component() {
        let err = "Data Lake".parse::<Component>().unwrap_err();
        assert_eq!(err, ValidationError::unknown_value("component", "Data Lake"));
    }

    #[test]
    fn ids_match_serde_form() {
        for component in Component::all() {
            let json = serde_json::to_string(component).unwrap();
            assert_eq!(json, format!("\"{}\"", component.id()));
        }
    }
}
