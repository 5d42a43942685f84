//! # medibook-selection
//!
//! The specialty selection reconciler consumed by the doctor-edit form.
//!
//! This crate provides:
//! - `SelectionSession` — the selected/removed/pending state machine with
//!   its two pure derivations (net-new ids to attach, candidate pool)
//! - `SelectionLifecycle` — dialog open/close re-initialization semantics
//!
//! All operations are synchronous, single-threaded, and infallible; each
//! editing session owns an isolated copy of its state.

pub mod lifecycle;
pub mod session;

pub use lifecycle::SelectionLifecycle;
pub use session::{AddOutcome, SelectionSession};
