//! Scenario files: the inputs of one break-even calculation.
//!
//! A scenario mirrors the project form: financial position, per-utility
//! lengths and cost rates, monthly overhead, connection mix and the solve
//! mode. Length ranges and asphalt/bedding rates are usually the same for
//! both utilities, so `[lengths]` and `[shared]` fill in any per-utility
//! value left unset.
//!
//! ```
//! use breakeven::infrastructure::config::scenario::Scenario;
//!
//! let scenario = Scenario::parse_toml(r#"
//! [financials]
//! current_expenses = 50000
//!
//! [lengths]
//! min_length = 4
//! max_length = 12
//!
//! [mode]
//! connection_rate = 20
//! "#).unwrap();
//! let inputs = scenario.to_inputs(None).unwrap();
//! assert_eq!(inputs.water.lengths, inputs.sewer.lengths);
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::money::{Amount, Length, Months, Rate};
use crate::domain::params::{
    BreakEvenInputs, LengthRange, MonthlyCosts, Probabilities, ProjectFinancials, SewerParams,
    SolveMode, WaterParams,
};
use crate::error::{ConfigError, Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinancialsSection {
    pub current_expenses: Option<Amount>,
    pub invoices_received: Option<Amount>,
    pub store_stock_value: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthsSection {
    pub min_length: Option<Length>,
    pub max_length: Option<Length>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SharedRatesSection {
    pub asphalt_cost: Option<Amount>,
    pub bedding_cost: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaterSection {
    pub min_length: Option<Length>,
    pub max_length: Option<Length>,
    pub pipe_cost_25: Option<Amount>,
    pub pipe_cost_32: Option<Amount>,
    pub meter_cost_25: Option<Amount>,
    pub meter_cost_32: Option<Amount>,
    pub asphalt_cost: Option<Amount>,
    pub bedding_cost: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SewerSection {
    pub min_length: Option<Length>,
    pub max_length: Option<Length>,
    pub pipe_cost: Option<Amount>,
    pub asphalt_cost: Option<Amount>,
    pub bedding_cost: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthlySection {
    pub direct: Option<Amount>,
    pub indirect: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbabilitiesSection {
    pub prob_water: Option<Decimal>,
    pub prob_25mm: Option<Decimal>,
    pub prob_mainline: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeSection {
    pub connection_rate: Option<Rate>,
    pub duration_months: Option<Months>,
}

/// Parsed scenario file.
///
/// Amounts left out default to zero and probabilities to 50%; lengths and
/// `current_expenses` are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub financials: FinancialsSection,
    #[serde(default)]
    pub lengths: LengthsSection,
    #[serde(default)]
    pub shared: SharedRatesSection,
    #[serde(default)]
    pub water: WaterSection,
    #[serde(default)]
    pub sewer: SewerSection,
    #[serde(default)]
    pub monthly: MonthlySection,
    #[serde(default)]
    pub probabilities: ProbabilitiesSection,
    #[serde(default)]
    pub mode: ModeSection,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or_else(|| ConfigError::MissingField { field }.into())
}

fn amount(value: Option<Amount>) -> Amount {
    value.unwrap_or(Decimal::ZERO)
}

impl Scenario {
    /// Read a scenario from a TOML file.
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

    /// Parse a scenario from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Resolve the scenario into solver inputs.
    ///
    /// `mode_override` replaces the `[mode]` table entirely, so a command
    /// line `--rate` wins over a `duration_months` in the file.
    pub fn to_inputs(&self, mode_override: Option<SolveMode>) -> Result<BreakEvenInputs> {
        let mode = match mode_override {
            Some(mode) => mode,
            None => SolveMode::from_options(self.mode.connection_rate, self.mode.duration_months)?,
        };

        Ok(BreakEvenInputs {
            financials: self.financials()?,
            water: self.water()?,
            sewer: self.sewer()?,
            monthly: MonthlyCosts {
                direct: amount(self.monthly.direct),
                indirect: amount(self.monthly.indirect),
            },
            mode,
            probabilities: self.probabilities(),
        })
    }

    fn financials(&self) -> Result<ProjectFinancials> {
        Ok(ProjectFinancials {
            current_expenses: required(
                self.financials.current_expenses,
                "financials.current_expenses",
            )?,
            invoices_received: amount(self.financials.invoices_received),
            store_stock_value: amount(self.financials.store_stock_value),
        })
    }

    fn lengths(
        &self,
        min: Option<Length>,
        max: Option<Length>,
        min_field: &'static str,
        max_field: &'static str,
    ) -> Result<LengthRange> {
        Ok(LengthRange::new(
            required(min.or(self.lengths.min_length), min_field)?,
            required(max.or(self.lengths.max_length), max_field)?,
        ))
    }

    fn water(&self) -> Result<WaterParams> {
        let water = &self.water;
        Ok(WaterParams {
            lengths: self.lengths(
                water.min_length,
                water.max_length,
                "water.min_length",
                "water.max_length",
            )?,
            pipe_cost_25: amount(water.pipe_cost_25),
            pipe_cost_32: amount(water.pipe_cost_32),
            meter_cost_25: amount(water.meter_cost_25),
            meter_cost_32: amount(water.meter_cost_32),
            asphalt_cost: amount(water.asphalt_cost.or(self.shared.asphalt_cost)),
            bedding_cost: amount(water.bedding_cost.or(self.shared.bedding_cost)),
        })
    }

    fn sewer(&self) -> Result<SewerParams> {
        let sewer = &self.sewer;
        Ok(SewerParams {
            lengths: self.lengths(
                sewer.min_length,
                sewer.max_length,
                "sewer.min_length",
                "sewer.max_length",
            )?,
            pipe_cost: amount(sewer.pipe_cost),
            asphalt_cost: amount(sewer.asphalt_cost.or(self.shared.asphalt_cost)),
            bedding_cost: amount(sewer.bedding_cost.or(self.shared.bedding_cost)),
        })
    }

    fn probabilities(&self) -> Probabilities {
        let defaults = Probabilities::default();
        let section = &self.probabilities;
        Probabilities {
            prob_water: section.prob_water.unwrap_or(defaults.prob_water),
            prob_25mm: section.prob_25mm.unwrap_or(defaults.prob_25mm),
            prob_mainline: section.prob_mainline.unwrap_or(defaults.prob_mainline),
        }
    }
}
