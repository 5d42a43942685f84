//! Form schema and rule types.
//!
//! A `FormSchema` is deserialized from TOML and holds an ordered list of
//! per-field rules plus cross-field checks. Rules carry the exact messages
//! the form surfaces to the user, so the schema document is the single
//! source of truth for both the constraint and its wording.

use std::path::Path;

use serde::{Deserialize, Serialize};

use medibook_contracts::error::{MedibookError, MedibookResult};

/// A single per-field constraint.
///
/// Expressed in TOML as a table with a `kind` discriminant (kebab-case):
///
/// ```toml
/// [[fields.checks]]
/// kind = "min-len"
/// min = 3
/// message = "Name must be at least 3 characters long"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldCheck {
    /// String value must be at least `min` characters long.
    MinLen { min: usize, message: String },
    /// String value must look like an email address.
    Email { message: String },
    /// String value must parse as a UUID.
    Uuid { message: String },
    /// Numeric value must be at least `min`.
    MinValue { min: f64, message: String },
    /// String value must equal one of `allowed`.
    OneOf { allowed: Vec<String>, message: String },
    /// Array value must hold at least `min` elements.
    MinItems { min: usize, message: String },
    /// Every element of an array value must parse as a UUID.
    UuidItems { message: String },
}

/// The rules applied to one form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    /// Dot-notation path into the payload, e.g. "doctor.name".
    pub path: String,

    /// Human-readable field name used in generated messages.
    pub label: String,

    /// When true, the field must be present, non-null, and (for strings)
    /// non-empty. Optional fields that are absent skip all checks — the
    /// backend treats them as "not provided".
    #[serde(default)]
    pub required: bool,

    /// Checks applied when the field is present. Evaluated in order; every
    /// failing check contributes one error to the report.
    #[serde(default)]
    pub checks: Vec<FieldCheck>,
}

/// A constraint spanning more than one field.
///
/// Only the two relations the schedule form needs are supported; the
/// variants name the fields they read so schema documents stay declarative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CrossCheck {
    /// The date at `end` must not precede the date at `start`
    /// (both "YYYY-MM-DD" strings).
    DateOrdering {
        start: String,
        end: String,
        /// The field the error is attributed to.
        path: String,
        message: String,
    },

    /// When the dates at `start_date` / `end_date` are equal, the "HH:MM"
    /// time at `end_time` must be strictly after the one at `start_time`.
    TimeOrderingSameDay {
        start_date: String,
        end_date: String,
        start_time: String,
        end_time: String,
        path: String,
        message: String,
    },
}

/// The top-level structure deserialized from a TOML schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    /// Unique identifier for this schema (e.g. "doctor-create-v1").
    pub schema_id: String,

    /// Per-field rules, evaluated in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldRule>,

    /// Cross-field checks, evaluated after all field rules.
    #[serde(default)]
    pub cross_checks: Vec<CrossCheck>,
}

impl FormSchema {
    /// Parse `s` as a TOML schema document.
    ///
    /// Returns `MedibookError::ConfigError` if the TOML is malformed or does
    /// not match the `FormSchema` shape.
    pub fn from_toml_str(s: &str) -> MedibookResult<Self> {
        toml::from_str(s).map_err(|e| MedibookError::ConfigError {
            reason: format!("failed to parse form schema TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a TOML schema document.
    pub fn from_file(path: &Path) -> MedibookResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedibookError::ConfigError {
            reason: format!("failed to read schema file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
