use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};

/// Reporting thresholds for the complexity engine.
///
/// Read once at engine construction and immutable for the duration of a run;
/// repeated or concurrent runs share the same snapshot without interference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityThresholds {
    /// Decision-point count at or above which a scope is reported.
    #[serde(default = "default_report_level")]
    pub report_level: u32,

    /// Include container average/highest violations in the report.
    #[serde(default = "default_show_container_metrics")]
    pub show_container_metrics: bool,

    /// Include per-unit violations in the report.
    #[serde(default = "default_show_unit_metrics")]
    pub show_unit_metrics: bool,
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self {
            report_level: default_report_level(),
            show_container_metrics: default_show_container_metrics(),
            show_unit_metrics: default_show_unit_metrics(),
        }
    }
}

impl ComplexityThresholds {
    pub const MIN_REPORT_LEVEL: u32 = 1;
    pub const MAX_REPORT_LEVEL: u32 = 30;

    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_REPORT_LEVEL..=Self::MAX_REPORT_LEVEL).contains(&self.report_level) {
            return Err(EngineError::Configuration(format!(
                "report_level must be between {} and {}, got {}",
                Self::MIN_REPORT_LEVEL,
                Self::MAX_REPORT_LEVEL,
                self.report_level
            )));
        }
        Ok(())
    }

    /// Parse and validate thresholds from a TOML snippet. Missing fields
    /// fall back to their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let thresholds: Self = toml::from_str(contents)?;
        thresholds.validate()?;
        Ok(thresholds)
    }
}

fn default_report_level() -> u32 {
    10
}
fn default_show_container_metrics() -> bool {
    true
}
fn default_show_unit_metrics() -> bool {
    true
}
