//! Doctor entity types.
//!
//! `DoctorRecord` mirrors the shape the backend returns for a doctor,
//! including the specialty association entries the reconciler reads at the
//! start of an edit session. Association entries may arrive partially
//! populated — the specialty id field is optional and consumers must
//! tolerate its absence.

use serde::{Deserialize, Serialize};

use crate::specialty::{Specialty, SpecialtyId};

/// An opaque doctor identifier assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoctorId(pub String);

impl DoctorId {
    /// Construct a doctor id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for DoctorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Doctor gender as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

/// One specialty-to-doctor association entry on a doctor record.
///
/// The backend sometimes returns entries with the id field missing (e.g.
/// when the joined specialty row was deleted). Such entries carry no usable
/// specialty and are dropped wherever ids are extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyAssignment {
    /// The id of the associated specialty, when populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialities_id: Option<SpecialtyId>,
    /// The embedded specialty record, when the backend expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialities: Option<Specialty>,
}

impl SpecialtyAssignment {
    /// An assignment carrying only the specialty id.
    pub fn of(id: impl Into<String>) -> Self {
        Self {
            specialities_id: Some(SpecialtyId::new(id)),
            specialities: None,
        }
    }
}

/// A doctor record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub id: DoctorId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub appointment_fee: u32,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub current_working_place: String,
    #[serde(default)]
    pub designation: String,
    /// The doctor's existing specialty associations.
    #[serde(default)]
    pub doctor_specialties: Vec<SpecialtyAssignment>,
}

impl DoctorRecord {
    /// A record with only the identity fields populated; every other field
    /// takes its empty default.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: DoctorId::new(id),
            name: name.into(),
            email: email.into(),
            contact_number: String::new(),
            address: String::new(),
            registration_number: String::new(),
            experience: 0,
            gender: None,
            appointment_fee: 0,
            qualification: String::new(),
            current_working_place: String::new(),
            designation: String::new(),
            doctor_specialties: Vec::new(),
        }
    }

    /// Replace the specialty associations.
    pub fn with_specialties(mut self, assignments: Vec<SpecialtyAssignment>) -> Self {
        self.doctor_specialties = assignments;
        self
    }

    /// The ids of the doctor's currently-associated specialties.
    ///
    /// Entries whose id field is missing are silently dropped — they carry
    /// no usable specialty reference.
    pub fn specialty_ids(&self) -> Vec<SpecialtyId> {
        self.doctor_specialties
            .iter()
            .filter_map(|assignment| assignment.specialities_id.clone())
            .collect()
    }
}
