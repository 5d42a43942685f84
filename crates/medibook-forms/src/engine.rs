//! Form payload validator.
//!
//! `FormValidator` evaluates a `FormSchema` against a `serde_json::Value`
//! payload. Evaluation runs in two phases:
//!
//! 1. **Field rules** — each `FieldRule` in declaration order. A required
//!    field that is absent fails immediately; an optional absent field is
//!    skipped entirely (the backend treats it as "not provided").
//! 2. **Cross-field checks** — each `CrossCheck` after all field rules.
//!
//! All failures are collected before returning so the form can render the
//! full error set in one pass rather than only the first failure.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::report::{FieldError, ValidationReport};
use crate::rule::{CrossCheck, FieldCheck, FieldRule, FormSchema};

/// The medibook form validator. Stateless; construct once and reuse.
#[derive(Debug, Default)]
pub struct FormValidator;

impl FormValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate `payload` against `schema`, accumulating every failure.
    pub fn validate(&self, schema: &FormSchema, payload: &serde_json::Value) -> ValidationReport {
        let mut errors: Vec<FieldError> = Vec::new();

        for rule in &schema.fields {
            self.check_field(rule, payload, &mut errors);
        }

        for check in &schema.cross_checks {
            self.check_cross(check, payload, &mut errors);
        }

        let passed = errors.is_empty();
        debug!(
            schema_id = %schema.schema_id,
            passed,
            error_count = errors.len(),
            "form validation complete"
        );

        ValidationReport { passed, errors }
    }

    // ── Field rules ───────────────────────────────────────────────────────────

    fn check_field(
        &self,
        rule: &FieldRule,
        payload: &serde_json::Value,
        errors: &mut Vec<FieldError>,
    ) {
        let value = match resolve_path(payload, &rule.path) {
            Some(v) => v,
            None => {
                if rule.required {
                    push_error(errors, &rule.path, format!("{} is required", rule.label));
                }
                // Optional and absent: nothing to check.
                return;
            }
        };

        // An empty string counts as "not provided" for required fields.
        if rule.required && value.as_str().is_some_and(str::is_empty) {
            push_error(errors, &rule.path, format!("{} is required", rule.label));
            return;
        }

        for check in &rule.checks {
            let failure: Option<&str> = match check {
                FieldCheck::MinLen { min, message } => match value.as_str() {
                    Some(s) if s.chars().count() >= *min => None,
                    _ => Some(message),
                },

                FieldCheck::Email { message } => match value.as_str() {
                    Some(s) if looks_like_email(s) => None,
                    _ => Some(message),
                },

                FieldCheck::Uuid { message } => match value.as_str() {
                    Some(s) if uuid::Uuid::parse_str(s).is_ok() => None,
                    _ => Some(message),
                },

                FieldCheck::MinValue { min, message } => match value.as_f64() {
                    Some(n) if n >= *min => None,
                    _ => Some(message),
                },

                FieldCheck::OneOf { allowed, message } => match value.as_str() {
                    Some(s) if allowed.iter().any(|a| a == s) => None,
                    _ => Some(message),
                },

                FieldCheck::MinItems { min, message } => match value.as_array() {
                    Some(items) if items.len() >= *min => None,
                    _ => Some(message),
                },

                FieldCheck::UuidItems { message } => match value.as_array() {
                    Some(items)
                        if items.iter().all(|item| {
                            item.as_str()
                                .map(|s| uuid::Uuid::parse_str(s).is_ok())
                                .unwrap_or(false)
                        }) =>
                    {
                        None
                    }
                    _ => Some(message),
                },
            };

            if let Some(message) = failure {
                push_error(errors, &rule.path, message.to_string());
            }
        }
    }

    // ── Cross-field checks ────────────────────────────────────────────────────

    fn check_cross(
        &self,
        check: &CrossCheck,
        payload: &serde_json::Value,
        errors: &mut Vec<FieldError>,
    ) {
        match check {
            CrossCheck::DateOrdering { start, end, path, message } => {
                let (Some(start_date), Some(end_date)) =
                    (resolve_date(payload, start), resolve_date(payload, end))
                else {
                    // Unparseable or missing dates fail the ordering check;
                    // presence itself is the field rules' concern.
                    push_error(errors, path, message.clone());
                    return;
                };
                if end_date < start_date {
                    push_error(errors, path, message.clone());
                }
            }

            CrossCheck::TimeOrderingSameDay {
                start_date,
                end_date,
                start_time,
                end_time,
                path,
                message,
            } => {
                let (Some(sd), Some(ed)) =
                    (resolve_date(payload, start_date), resolve_date(payload, end_date))
                else {
                    return; // the date check already reported the problem
                };
                // Times are only comparable when the window is a single day.
                if sd != ed {
                    return;
                }
                let (Some(st), Some(et)) =
                    (resolve_time(payload, start_time), resolve_time(payload, end_time))
                else {
                    push_error(errors, path, message.clone());
                    return;
                };
                if et <= st {
                    push_error(errors, path, message.clone());
                }
            }
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn push_error(errors: &mut Vec<FieldError>, path: &str, message: String) {
    warn!(field = %path, %message, "form field failed validation");
    errors.push(FieldError {
        path: path.to_string(),
        message,
    });
}

/// Resolve a dot-notation field path (e.g. `"doctor.name"`) against a JSON
/// value. Returns `None` when any segment is missing or the value is JSON
/// `null`.
fn resolve_path<'v>(value: &'v serde_json::Value, path: &str) -> Option<&'v serde_json::Value> {
    let mut current = value;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(v) if !v.is_null() => current = v,
            _ => return None,
        }
    }
    Some(current)
}

fn resolve_date(payload: &serde_json::Value, path: &str) -> Option<NaiveDate> {
    let s = resolve_path(payload, path)?.as_str()?;
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn resolve_time(payload: &serde_json::Value, path: &str) -> Option<NaiveTime> {
    let s = resolve_path(payload, path)?.as_str()?;
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// A deliberately light email shape check: one '@' with a dotted domain.
/// Real deliverability is the backend's concern.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// ── Tests ─────────────────────────────────────────────────────────────────────
