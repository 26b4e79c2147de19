//! Technology and CloudProvider enums for deployment options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A deployment option for a lakehouse component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    AwsManaged,
    AzureManaged,
    GcpManaged,
    DatabricksManaged,
    SelfHosted,
}

impl Technology {
    /// The technology every component starts on.
    pub const BASELINE: Technology = Technology::AwsManaged;

    /// Returns all technologies in canonical order.
    pub fn all() -> &'static [Technology] {
        &[
            Technology::AwsManaged,
            Technology::AzureManaged,
            Technology::GcpManaged,
            Technology::DatabricksManaged,
            Technology::SelfHosted,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Technology::AwsManaged => "AWS Managed",
            Technology::AzureManaged => "Azure Managed",
            Technology::GcpManaged => "GCP Managed",
            Technology::DatabricksManaged => "Databricks Managed",
            Technology::SelfHosted => "Self-Hosted",
        }
    }

    /// Returns the snake_case identifier (matches the serde form).
    pub fn id(&self) -> &'static str {
        match self {
            Technology::AwsManaged => "aws_managed",
            Technology::AzureManaged => "azure_managed",
            Technology::GcpManaged => "gcp_managed",
            Technology::DatabricksManaged => "databricks_managed",
            Technology::SelfHosted => "self_hosted",
        }
    }

    /// Returns the managed-cloud provider behind this technology, if any.
    ///
    /// Databricks Managed and Self-Hosted are provider-agnostic.
    pub fn cloud_provider(&self) -> Option<CloudProvider> {
        match self {
            Technology::AwsManaged => Some(CloudProvider::Aws),
            Technology::AzureManaged => Some(CloudProvider::Azure),
            Technology::GcpManaged => Some(CloudProvider::Gcp),
            Technology::DatabricksManaged | Technology::SelfHosted => None,
        }
    }

    /// Returns true for the platform-vendor-managed option.
    pub fn is_vendor_managed(&self) -> bool {
        matches!(self, Technology::DatabricksManaged)
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Technology {
    type Err = ValidationError;

    /// Accepts either the display name or the snake_case id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Technology::all()
            .iter()
            .copied()
            .find(|t| t.display_name() == needle || t.id() == needle)
            .ok_or_else(|| ValidationError::unknown_value("technology", s))
    }
}

/// One of the three managed-cloud providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    /// Returns all providers in canonical order.
    pub fn all() -> &'static [CloudProvider] {
        &[CloudProvider::Aws, CloudProvider::Azure, CloudProvider::Gcp]
    }

    /// Returns the managed technology offered by this provider.
    pub fn managed_technology(&self) -> Technology {
        match self {
            CloudProvider::Aws => Technology::AwsManaged,
            CloudProvider::Azure => Technology::AzureManaged,
            CloudProvider::Gcp => Technology::GcpManaged,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Azure => "Azure",
            CloudProvider::Gcp => "GCP",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
