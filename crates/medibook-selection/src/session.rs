//! The specialty selection reconciler.
//!
//! A `SelectionSession` tracks which specialties are assigned to the doctor
//! record being edited while the user adds and removes candidates in the
//! form. It maintains four pieces of state:
//!
//! - `original` — the assignment set captured once when editing began
//! - `selected` — the ordered working selection shown in the form
//! - `removed`  — originally-assigned ids the user has deselected
//! - `pending`  — at most one id picked in the selector but not yet confirmed
//!
//! and derives the two lists the save operation needs: the net-new ids to
//! attach and the removed ids to detach.
//!
//! The reconciliation rule that makes this worth a dedicated type: an id
//! that is both originally-assigned and currently-selected must never
//! appear in the removal list. Removing an original id records it in
//! `removed`; re-adding it cancels that pending removal. Ids added and
//! removed within the same session vanish without a trace — the backend
//! never had them.
//!
//! All operations are synchronous and infallible. Every invalid input is a
//! silent no-op rather than an error (see `AddOutcome` for the observable
//! discriminant).

use serde::{Deserialize, Serialize};
use tracing::debug;

use medibook_contracts::doctor::DoctorRecord;
use medibook_contracts::specialty::{Specialty, SpecialtyId};

/// What `confirm_add` did with the pending choice.
///
/// The session state never changes on the non-`Added` variants; they exist
/// so a hosting form can surface a warning for the duplicate case instead
/// of silently swallowing the click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The pending choice was appended to the selection.
    Added(SpecialtyId),
    /// The pending choice was already selected; nothing changed.
    AlreadySelected(SpecialtyId),
    /// No pending choice was set; nothing changed.
    NoPendingChoice,
}

/// One editing session's selection state.
///
/// Construct with `for_edit` when a doctor record is being edited, or
/// `for_create` for the blank create flow. The session is discarded when
/// the hosting dialog closes — only the derived output lists outlive it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSession {
    is_editing: bool,
    /// Captured once at construction and never mutated thereafter.
    original: Vec<SpecialtyId>,
    /// Ordered working selection; insertion order is display order.
    selected: Vec<SpecialtyId>,
    /// Subset of `original` the user has deselected this session.
    removed: Vec<SpecialtyId>,
    /// The candidate picked in the selector, awaiting confirmation.
    pending: Option<SpecialtyId>,
}

impl SelectionSession {
    /// A blank session for the doctor-create flow.
    ///
    /// Every set starts empty and `remove` never records removals, since
    /// there is no original assignment to detach from.
    pub fn for_create() -> Self {
        Self {
            is_editing: false,
            original: Vec::new(),
            selected: Vec::new(),
            removed: Vec::new(),
            pending: None,
        }
    }

    /// A session seeded from an existing doctor record.
    ///
    /// The working selection and the original assignment both start as the
    /// ids extracted from the record's specialty associations. Association
    /// entries without an id are dropped silently.
    pub fn for_edit(doctor: &DoctorRecord) -> Self {
        let ids = doctor.specialty_ids();
        debug!(
            doctor_id = %doctor.id,
            specialty_count = ids.len(),
            "selection session opened in edit mode"
        );
        Self {
            is_editing: true,
            original: ids.clone(),
            selected: ids,
            removed: Vec::new(),
            pending: None,
        }
    }

    /// True when this session edits an existing record.
    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// The ordered working selection.
    pub fn selected(&self) -> &[SpecialtyId] {
        &self.selected
    }

    /// The originally-assigned ids deselected this session, in removal order.
    ///
    /// Always a subset of the original assignment: ids that were added and
    /// removed within the session never appear here.
    pub fn removed(&self) -> &[SpecialtyId] {
        &self.removed
    }

    /// The candidate awaiting confirmation, if any.
    pub fn pending_choice(&self) -> Option<&SpecialtyId> {
        self.pending.as_ref()
    }

    // ── Operations ────────────────────────────────────────────────────────────

    /// Record a candidate picked in the selector control.
    ///
    /// Overwrites any prior pending choice. No validation happens here —
    /// `confirm_add` decides whether the choice is usable.
    pub fn set_pending_choice(&mut self, id: SpecialtyId) {
        self.pending = Some(id);
    }

    /// Consume the pending choice and append it to the selection.
    ///
    /// No-op when no choice is pending or the choice is already selected —
    /// the selection never holds duplicates. Re-adding an id that was
    /// removed earlier this session cancels the pending removal, so an id
    /// that is both original and selected never reaches the removal output.
    pub fn confirm_add(&mut self) -> AddOutcome {
        let Some(id) = self.pending.clone() else {
            return AddOutcome::NoPendingChoice;
        };

        if self.selected.contains(&id) {
            // The pending choice is only cleared on a successful add, so
            // the selector keeps showing the duplicate pick.
            return AddOutcome::AlreadySelected(id);
        }

        self.selected.push(id.clone());
        self.removed.retain(|removed| removed != &id);
        self.pending = None;

        debug!(specialty_id = %id, "specialty added to selection");
        AddOutcome::Added(id)
    }

    /// Remove an id from the working selection.
    ///
    /// When editing, an id that belongs to the original assignment is
    /// recorded in `removed` so the save can detach it. Ids the backend
    /// never had simply vanish from the selection.
    pub fn remove(&mut self, id: &SpecialtyId) {
        self.selected.retain(|selected| selected != id);

        if self.is_editing
            && self.original.contains(id)
            && !self.removed.contains(id)
        {
            self.removed.push(id.clone());
            debug!(specialty_id = %id, "original specialty marked for removal");
        }
    }

    // ── Derivations ───────────────────────────────────────────────────────────

    /// The ids to attach to the doctor on save.
    ///
    /// In create mode every selected id is new. In edit mode only ids that
    /// were not part of the original assignment are returned, in selection
    /// order.
    pub fn net_new_specialties(&self) -> Vec<SpecialtyId> {
        if !self.is_editing {
            return self.selected.clone();
        }
        self.selected
            .iter()
            .filter(|id| !self.original.contains(id))
            .cloned()
            .collect()
    }

    /// The catalog entries not yet selected, in catalog order.
    ///
    /// This is the candidate pool the selector control offers.
    pub fn available_candidates<'a>(&self, catalog: &'a [Specialty]) -> Vec<&'a Specialty> {
        catalog
            .iter()
            .filter(|specialty| !self.selected.contains(&specialty.id))
            .collect()
    }
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::for_create()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
