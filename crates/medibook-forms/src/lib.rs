//! # medibook-forms
//!
//! TOML-driven form validation for the medibook admin forms.
//!
//! A `FormSchema` is a declarative rule document (per-field checks plus
//! cross-field checks) carrying the exact user-facing messages. The
//! `FormValidator` evaluates a schema against a JSON form payload and
//! accumulates every failure into a `ValidationReport`.
//!
//! The `schemas` module bundles the documents for the admin forms: doctor
//! create/update, admin create/update, schedule create, and appointment
//! status update.

pub mod engine;
pub mod report;
pub mod rule;
pub mod schemas;

pub use engine::FormValidator;
pub use report::{FieldError, ValidationReport};
pub use rule::{CrossCheck, FieldCheck, FieldRule, FormSchema};
