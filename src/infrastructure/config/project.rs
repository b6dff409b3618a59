//! Project and author metadata shown by `breakeven about`.

use serde::Deserialize;

/// Descriptive metadata; carries no computational meaning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl ProjectInfo {
    /// Labelled fields that are set, in display order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Developed by", &self.name),
            ("Company", &self.company),
            ("Contact", &self.contact),
            ("Project", &self.project),
            ("Last updated", &self.last_updated),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}
