//! Handler for the `scenario` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::solver::validate;
use crate::domain::money::format_amount;
use crate::domain::params::{BreakEvenInputs, SolveMode};
use crate::error::{ConfigError, InfeasibilityError, Result};
use crate::infrastructure::config::scenario::Scenario;

/// Documented scenario template.
const SCENARIO_TEMPLATE: &str = include_str!("../../../../scenario.toml.example");

/// Load a scenario file and resolve it into solver inputs.
pub fn load_inputs(path: &Path, mode: Option<SolveMode>) -> Result<BreakEvenInputs> {
    Scenario::load(path)?.to_inputs(mode)
}

/// Execute `scenario init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "scenario",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, SCENARIO_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "scenario.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Scenario Initialized");
    output::success("Created scenario file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your project figures", path.display()));
    output::note(&format!("2. Run: breakeven scenario validate {}", path.display()));
    output::note(&format!("3. Run: breakeven solve {}", path.display()));
    Ok(())
}

/// Execute `scenario validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let inputs = load_inputs(path, None)?;
    validate(&inputs)?;

    let (mode, target) = match inputs.mode {
        SolveMode::ConnectionRate(rate) => ("connection_rate", rate),
        SolveMode::Duration(months) => ("duration_months", months),
    };
    let net_expenses = inputs.financials.net_current_expenses().ok_or(
        InfeasibilityError::OutOfRange {
            quantity: "net current expenses",
        },
    )?;

    if output::is_json() {
        output::json_output(json!({
            "command": "scenario.validate",
            "path": path.display().to_string(),
            "valid": true,
            "mode": mode,
            "target": target.normalize().to_string(),
            "net_current_expenses": net_expenses.normalize().to_string(),
        }));
        return Ok(());
    }

    output::success("Scenario is valid");
    output::field("Path", path.display());
    output::field("Solve mode", format!("{mode} = {}", target.normalize()));
    output::field("Net current expenses", format_amount(net_expenses));
    output::hint(&format!("run `breakeven solve {}`", path.display()));
    Ok(())
}
