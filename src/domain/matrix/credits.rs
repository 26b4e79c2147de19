//! Startup credit programs offered by each vendor (if approved).

use serde::Serialize;

use crate::domain::foundation::Technology;

/// A vendor's startup credit offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupCredits {
    pub vendor: &'static str,
    /// Technology the credits apply to.
    pub technology: Technology,
    /// Maximum credit in USD.
    pub max_usd: u32,
    /// How long the credits remain valid, when the vendor states it.
    pub duration_months: Option<u32>,
}

/// Credit programs in display order.
pub static STARTUP_CREDITS: [StartupCredits; 4] = [
    StartupCredits {
        vendor: "AWS",
        technology: Technology::AwsManaged,
        max_usd: 100_000,
        duration_months: Some(24),
    },
    StartupCredits {
        vendor: "Google Cloud",
        technology: Technology::GcpManaged,
        max_usd: 100_000,
        duration_months: Some(12),
    },
    StartupCredits {
        vendor: "Azure",
        technology: Technology::AzureManaged,
        max_usd: 150_000,
        duration_months: Some(12),
    },
    StartupCredits {
        vendor: "Databricks",
        technology: Technology::DatabricksManaged,
        max_usd: 6_000,
        duration_months: None,
    },
];

/// Returns the credit program for a technology. Self-hosting has none.
pub fn startup_credits_for(technology: Technology) -> Option<&'static StartupCredits> {
    STARTUP_CREDITS.iter().find(|c| c.technology == technology)
}
