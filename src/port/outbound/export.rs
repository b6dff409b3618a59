//! Serialization of a solved result for downstream tools.

use std::fmt;

use crate::domain::result::BreakEvenResult;
use crate::error::Result;

/// Machine-readable export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Conventional file extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Renders one result as a self-contained document.
///
/// Field names are identical across formats.
pub trait ResultExporter: Send + Sync {
    /// Format produced by this exporter.
    fn format(&self) -> ExportFormat;

    /// Render `result`.
    fn export(&self, result: &BreakEvenResult) -> Result<String>;
}
