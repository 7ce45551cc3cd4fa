use serde::{Deserialize, Serialize};

/// Prefix of the text shown in place of a description when generation failed.
pub const FAILURE_PREFIX: &str = "Error generating description:";

/// Result of one call to the text generator.
///
/// Failures are values, not errors: the caller decides whether a failure
/// message may stand in for the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Generated(String),
    Failed(String),
}

impl GenerationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationOutcome::Failed(_))
    }

    /// Text shown to the user and stored on save.
    pub fn display_text(&self) -> String {
        match self {
            GenerationOutcome::Generated(text) => text.clone(),
            GenerationOutcome::Failed(reason) => format!("{FAILURE_PREFIX} {reason}"),
        }
    }
}
