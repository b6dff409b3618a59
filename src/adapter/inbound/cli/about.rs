//! Handler for `about`.

use serde_json::{json, Map, Value};

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `about`.
pub fn execute(config: &Config) -> Result<()> {
    let entries = config.project.entries();

    if output::is_json() {
        let project: Map<String, Value> = entries
            .iter()
            .map(|(label, value)| ((*label).to_string(), Value::from(*value)))
            .collect();
        output::json_output(json!({
            "command": "about",
            "version": env!("CARGO_PKG_VERSION"),
            "project": project,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("About");
    if entries.is_empty() {
        output::note("No project information configured.");
        output::hint("add a [project] table to your config file");
        return Ok(());
    }
    for (label, value) in entries {
        output::field(label, value);
    }
    Ok(())
}
