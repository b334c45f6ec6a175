use serde::{Deserialize, Serialize};

use crate::serde::CodecError;

/// Controls how much of a failure's cause chain ends up in a defect report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Whether causes are rendered at all.
    #[serde(default = "ReportConfig::default_include_causes")]
    pub include_causes: bool,
    /// Number of cause links rendered before the chain is cut off.
    #[serde(default = "ReportConfig::default_max_depth")]
    pub max_depth: usize,
}

impl ReportConfig {
    const fn default_include_causes() -> bool {
        true
    }

    const fn default_max_depth() -> usize {
        16
    }

    /// Parses a configuration from a TOML document. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, CodecError> {
        Ok(toml::from_str(input)?)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_causes: Self::default_include_causes(),
            max_depth: Self::default_max_depth(),
        }
    }
}
