//! JSON export of a solved result.

use crate::domain::result::BreakEvenResult;
use crate::error::Result;
use crate::port::outbound::export::{ExportFormat, ResultExporter};

/// Serializes a result with `serde_json`.
#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    pub pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ResultExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, result: &BreakEvenResult) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }
}
