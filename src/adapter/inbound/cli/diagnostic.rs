//! Miette-based error diagnostics for CLI error presentation.
//!
//! Scenario and config files are hand-edited TOML, so parse failures are
//! shown with the offending line and a label under the bad span.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// TOML document error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(breakeven::toml))]
pub struct TomlError {
    /// Human-readable error message.
    pub message: String,

    /// Source content of the file.
    #[source_code]
    pub src: miette::NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl TomlError {
    /// Build a diagnostic from a `toml` parse error.
    ///
    /// Errors without a location point at the start of the file.
    #[must_use]
    pub fn from_toml(name: &str, src: &str, err: &toml::de::Error) -> Self {
        let span = err
            .span()
            .map_or((0, 0), |range| (range.start, range.len()));
        Self {
            message: err.message().to_string(),
            src: miette::NamedSource::new(name, src.to_string()),
            span: span.into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
