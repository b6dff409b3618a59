//! Handler for `solve`.

use std::fs;

use serde_json::json;

use crate::adapter::inbound::cli::command::{ReportFormat, SolveArgs};
use crate::adapter::inbound::cli::{output, report, scenario};
use crate::adapter::outbound::export::exporter;
use crate::application::solver::BreakEvenSolver;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::export::ExportFormat;

/// Execute `solve`.
pub fn execute(args: &SolveArgs, config: &Config) -> Result<()> {
    let inputs = scenario::load_inputs(&args.scenario, args.mode.solve_mode())?;
    let result = BreakEvenSolver::new(config.solver_settings()).solve(&inputs)?;
    let currency = config.report.currency.as_str();

    let document = match args.format {
        ReportFormat::Text if args.output.is_none() => {
            if output::is_json() {
                output::json_output(json!({ "command": "solve", "result": result }));
            } else {
                report::print(&result, currency);
            }
            return Ok(());
        }
        ReportFormat::Text => report::render_text(&result, currency),
        ReportFormat::Table => report::render_table(&result, currency),
        ReportFormat::Json => exporter(ExportFormat::Json).export(&result)?,
        ReportFormat::Csv => exporter(ExportFormat::Csv).export(&result)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &document)?;
            output::success("Wrote break-even report");
            output::field("Path", path.display());
            output::field("Break-Even Date", output::highlight(&result.break_even_date));
        }
        None if args.format == ReportFormat::Table && !output::is_json() => {
            output::header(env!("CARGO_PKG_VERSION"));
            output::lines(&document);
        }
        None => output::raw(&document),
    }
    Ok(())
}
