//! Dialog lifecycle management for the selection session.
//!
//! The hosting dialog drives the session with two signals: an open/close
//! flag and the identity of the doctor being edited. `SelectionLifecycle`
//! reproduces the reset semantics of the form:
//!
//! - closed → open: a fresh session is initialized from the doctor record
//!   (or a blank create session when no record is supplied)
//! - doctor identity changes while open: re-initialize
//! - edit/create mode flips while open: re-initialize
//! - open → closed: everything resets to empty, discarding unsaved edits
//!
//! `sync` is idempotent — calling it repeatedly with unchanged inputs never
//! disturbs in-progress edits.

use serde::{Deserialize, Serialize};
use tracing::debug;

use medibook_contracts::doctor::{DoctorId, DoctorRecord};

use crate::session::SelectionSession;

/// Owns a `SelectionSession` and re-initializes it on lifecycle transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionLifecycle {
    open: bool,
    editing: bool,
    doctor_id: Option<DoctorId>,
    session: SelectionSession,
}

impl SelectionLifecycle {
    /// A closed lifecycle holding an empty session.
    pub fn new() -> Self {
        Self {
            open: false,
            editing: false,
            doctor_id: None,
            session: SelectionSession::for_create(),
        }
    }

    /// True while the hosting dialog is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current session. Empty (create-mode) while closed.
    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    /// Mutable access for issuing add/remove operations while open.
    pub fn session_mut(&mut self) -> &mut SelectionSession {
        &mut self.session
    }

    /// Reconcile the session with the dialog's current inputs.
    ///
    /// `is_editing` and `doctor` come from the hosting form; edit mode is
    /// only effective when a record is actually supplied. Calling this with
    /// unchanged inputs is a no-op, so the host may call it on every render.
    pub fn sync(&mut self, open: bool, is_editing: bool, doctor: Option<&DoctorRecord>) {
        if !open {
            if self.open {
                debug!("selection dialog closed, discarding session state");
            }
            self.open = false;
            self.editing = false;
            self.doctor_id = None;
            self.session = SelectionSession::for_create();
            return;
        }

        let editing = is_editing && doctor.is_some();
        let doctor_id = doctor.map(|d| d.id.clone());
        let needs_init = !self.open || self.editing != editing || self.doctor_id != doctor_id;

        if needs_init {
            self.session = match (editing, doctor) {
                (true, Some(record)) => SelectionSession::for_edit(record),
                _ => SelectionSession::for_create(),
            };
            debug!(
                editing,
                doctor_id = doctor_id.as_ref().map(|id| id.0.as_str()).unwrap_or("-"),
                "selection session (re)initialized"
            );
        }

        self.open = true;
        self.editing = editing;
        self.doctor_id = doctor_id;
    }
}

impl Default for SelectionLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use medibook_contracts::doctor::{DoctorRecord, SpecialtyAssignment};
    use medibook_contracts::specialty::SpecialtyId;

    use super::SelectionLifecycle;

    fn sid(s: &str) -> SpecialtyId {
        SpecialtyId::new(s)
    }

    fn doctor(id: &str, specialties: &[&str]) -> DoctorRecord {
        DoctorRecord::new(id, "Dr. Test", "doc@example.com").with_specialties(
            specialties.iter().map(|s| SpecialtyAssignment::of(*s)).collect(),
        )
    }

    #[test]
    fn opening_in_edit_mode_seeds_from_the_record() {
        let record = doctor("doc-1", &["A", "B"]);
        let mut lifecycle = SelectionLifecycle::new();

        lifecycle.sync(true, true, Some(&record));

        assert!(lifecycle.is_open());
        assert_eq!(lifecycle.session().selected(), &[sid("A"), sid("B")]);
    }

    #[test]
    fn opening_in_create_mode_starts_empty() {
        let mut lifecycle = SelectionLifecycle::new();

        lifecycle.sync(true, false, None);

        assert!(lifecycle.session().selected().is_empty());
        assert!(!lifecycle.session().is_editing());
    }

    #[test]
    fn redundant_sync_does_not_disturb_edits() {
        let record = doctor("doc-1", &["A"]);
        let mut lifecycle = SelectionLifecycle::new();
        lifecycle.sync(true, true, Some(&record));

        lifecycle.session_mut().remove(&sid("A"));
        assert_eq!(lifecycle.session().removed(), &[sid("A")]);

        // Same inputs again — a re-render, not a lifecycle transition.
        lifecycle.sync(true, true, Some(&record));
        assert_eq!(lifecycle.session().removed(), &[sid("A")]);
    }

    #[test]
    fn switching_doctors_while_open_reinitializes() {
        let first = doctor("doc-1", &["A"]);
        let second = doctor("doc-2", &["B", "C"]);
        let mut lifecycle = SelectionLifecycle::new();

        lifecycle.sync(true, true, Some(&first));
        lifecycle.session_mut().remove(&sid("A"));

        lifecycle.sync(true, true, Some(&second));

        assert_eq!(lifecycle.session().selected(), &[sid("B"), sid("C")]);
        assert!(lifecycle.session().removed().is_empty(), "prior edits discarded");
    }

    #[test]
    fn closing_discards_unsaved_edits() {
        let record = doctor("doc-1", &["A", "B"]);
        let mut lifecycle = SelectionLifecycle::new();
        lifecycle.sync(true, true, Some(&record));
        lifecycle.session_mut().remove(&sid("A"));

        lifecycle.sync(false, true, Some(&record));

        assert!(!lifecycle.is_open());
        assert!(lifecycle.session().selected().is_empty());
        assert!(lifecycle.session().removed().is_empty());
        assert!(lifecycle.session().pending_choice().is_none());
    }

    #[test]
    fn reopening_reflects_the_current_record_not_discarded_edits() {
        let record = doctor("doc-1", &["A", "B"]);
        let mut lifecycle = SelectionLifecycle::new();

        // First session: remove A, then close without saving.
        lifecycle.sync(true, true, Some(&record));
        lifecycle.session_mut().remove(&sid("A"));
        lifecycle.sync(false, true, Some(&record));

        // Reopen for the same doctor: fresh initialization from the record.
        lifecycle.sync(true, true, Some(&record));
        assert_eq!(lifecycle.session().selected(), &[sid("A"), sid("B")]);
        assert!(lifecycle.session().removed().is_empty());
    }

    #[test]
    fn mode_flip_while_open_reinitializes() {
        let record = doctor("doc-1", &["A"]);
        let mut lifecycle = SelectionLifecycle::new();
        lifecycle.sync(true, true, Some(&record));
        assert!(lifecycle.session().is_editing());

        lifecycle.sync(true, false, Some(&record));
        assert!(!lifecycle.session().is_editing());
        assert!(lifecycle.session().selected().is_empty());
    }

    #[test]
    fn edit_without_a_record_falls_back_to_create_mode() {
        let mut lifecycle = SelectionLifecycle::new();
        lifecycle.sync(true, true, None);

        assert!(!lifecycle.session().is_editing());
        assert!(lifecycle.session().selected().is_empty());
    }
}
