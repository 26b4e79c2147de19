//! Snapshot output configuration

use serde::Deserialize;

/// How the binary prints the dashboard snapshot
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Indented JSON when true, one line otherwise
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}
