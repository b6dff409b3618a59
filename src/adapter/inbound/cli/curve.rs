//! Handler for `curve`.

use std::fs;

use serde_json::json;

use crate::adapter::inbound::cli::command::CurveArgs;
use crate::adapter::inbound::cli::{output, scenario};
use crate::adapter::outbound::export::projection_csv;
use crate::application::projection::Projection;
use crate::application::solver::BreakEvenSolver;
use crate::domain::money::format_amount;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `curve`.
pub fn execute(args: &CurveArgs, config: &Config) -> Result<()> {
    let inputs = scenario::load_inputs(&args.scenario, args.mode.solve_mode())?;
    let settings = config.solver_settings();
    let result = BreakEvenSolver::new(settings).solve(&inputs)?;
    let projection = Projection::build(
        &result,
        settings.anchor_date,
        config.report.curve_max_points,
    )?;

    if output::is_json() && args.output.is_none() {
        output::json_output(json!({ "command": "curve", "projection": projection }));
        return Ok(());
    }

    let csv = projection_csv(&projection);
    let Some(path) = &args.output else {
        output::raw(&csv);
        return Ok(());
    };

    fs::write(path, csv)?;
    output::success("Wrote projection");
    output::field("Path", path.display());
    output::field("Points", projection.points.len());
    output::field(
        "Break-even",
        format!(
            "{} connections, {} months ({})",
            format_amount(projection.marker.connections),
            format_amount(projection.marker.months),
            projection.marker.date
        ),
    );
    let ticks: Vec<_> = projection
        .ticks()
        .filter_map(|point| point.month_label.as_deref())
        .collect();
    if !ticks.is_empty() {
        output::field("Time axis", ticks.join(", "));
    }
    Ok(())
}
