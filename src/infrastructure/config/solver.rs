//! Solver configuration.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::solver::{
    default_anchor_date, SolverSettings, DEFAULT_MAX_CONNECTION_RATE,
};
use crate::domain::money::Rate;
use crate::error::{ConfigError, Result};

/// Solver configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Connection-rate ceiling used for the minimum feasible duration.
    #[serde(default = "default_max_connection_rate")]
    pub max_connection_rate: Rate,
    /// Start of the break-even timeline (`"YYYY-MM-DD"`).
    #[serde(default = "default_anchor_date")]
    pub anchor_date: NaiveDate,
}

fn default_max_connection_rate() -> Rate {
    DEFAULT_MAX_CONNECTION_RATE
}

impl SolverConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_connection_rate <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "max_connection_rate",
                reason: format!("must be positive, got {}", self.max_connection_rate),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_connection_rate: default_max_connection_rate(),
            anchor_date: default_anchor_date(),
        }
    }
}

impl From<&SolverConfig> for SolverSettings {
    fn from(config: &SolverConfig) -> Self {
        Self {
            max_connection_rate: config.max_connection_rate,
            anchor_date: config.anchor_date,
        }
    }
}
