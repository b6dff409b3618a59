//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Every table is optional; a missing file means defaults.
//!
//! # Example
//!
//! ```no_run
//! use breakeven::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("breakeven.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::project::ProjectInfo;
use super::report::ReportConfig;
use super::solver::SolverConfig;
use crate::application::solver::SolverSettings;
use crate::error::{ConfigError, Error, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Solver constants: rate ceiling and timeline anchor.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Currency and export limits.
    #[serde(default)]
    pub report: ReportConfig,

    /// Project and author metadata.
    #[serde(default)]
    pub project: ProjectInfo,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content).map_err(|err| match err {
            Error::Config(ConfigError::Parse(source)) => ConfigError::ParseFile {
                name: path.display().to_string(),
                content,
                source,
            }
            .into(),
            other => other,
        })
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Solver settings derived from this configuration.
    #[must_use]
    pub fn solver_settings(&self) -> SolverSettings {
        SolverSettings::from(&self.solver)
    }

    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        self.solver.validate()?;
        self.report.validate()?;
        Ok(())
    }
}
