//! Demo scenarios, each a console walkthrough of one admin flow.

pub mod create_doctor;
pub mod edit_doctor;
pub mod validate_forms;

use medibook_contracts::doctor::{DoctorId, DoctorRecord, SpecialtyAssignment};
use medibook_contracts::specialty::Specialty;

pub const CARDIOLOGY: &str = "11111111-1111-4111-8111-111111111111";
pub const NEUROLOGY: &str = "22222222-2222-4222-8222-222222222222";
pub const DERMATOLOGY: &str = "33333333-3333-4333-8333-333333333333";

/// The specialty catalog the selector offers.
pub fn specialty_catalog() -> Vec<Specialty> {
    vec![
        Specialty::new(CARDIOLOGY, "Cardiology"),
        Specialty::new(NEUROLOGY, "Neurology"),
        Specialty::new(DERMATOLOGY, "Dermatology"),
    ]
}

/// A doctor record as the backend would return it, already holding the
/// first two catalog specialties.
pub fn sample_doctor() -> DoctorRecord {
    DoctorRecord {
        id: DoctorId::new("doc-42"),
        name: "Dr. Ayesha Rahman".to_string(),
        email: "ayesha@clinic.example".to_string(),
        contact_number: "01711112222".to_string(),
        address: "12 Green Road".to_string(),
        registration_number: "REG-4521".to_string(),
        experience: 8,
        gender: None,
        appointment_fee: 1500,
        qualification: "MBBS, FCPS".to_string(),
        current_working_place: "City Medical College".to_string(),
        designation: "Consultant".to_string(),
        doctor_specialties: vec![
            SpecialtyAssignment::of(CARDIOLOGY),
            SpecialtyAssignment::of(NEUROLOGY),
        ],
    }
}
