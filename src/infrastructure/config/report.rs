//! Report and export configuration.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Currency code printed next to amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Upper bound on points written by `curve`.
    #[serde(default = "default_curve_max_points")]
    pub curve_max_points: usize,
}

fn default_currency() -> String {
    "SAR".into()
}

const fn default_curve_max_points() -> usize {
    2000
}

impl ReportConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "currency",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        if self.curve_max_points < 2 {
            return Err(ConfigError::InvalidValue {
                field: "curve_max_points",
                reason: format!("must be at least 2, got {}", self.curve_max_points),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            curve_max_points: default_curve_max_points(),
        }
    }
}
