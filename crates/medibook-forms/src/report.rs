//! Validation report types.

use serde::{Deserialize, Serialize};

/// The result of running a `FormSchema` against a form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True only if every rule passed.
    pub passed: bool,
    /// All failures collected during this run. Empty on pass.
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Flatten the report into a single "path: message, path: message"
    /// string for error propagation and logs.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single field failure within a `ValidationReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// The field path the failure is attributed to.
    pub path: String,
    /// The user-facing message from the schema document.
    pub message: String,
}
