//! # medibook-contracts
//!
//! Shared types, backend data shapes, and error types for the medibook
//! admin core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod appointment;
pub mod doctor;
pub mod error;
pub mod schedule;
pub mod specialty;

#[cfg(test)]
mod tests {
    use super::*;
    use appointment::{AppointmentStatus, PaymentStatus};
    use doctor::{DoctorId, DoctorRecord, Gender, SpecialtyAssignment};
    use error::MedibookError;
    use specialty::SpecialtyId;

    // ── SpecialtyAssignment / DoctorRecord ───────────────────────────────────

    fn bare_doctor(assignments: Vec<SpecialtyAssignment>) -> DoctorRecord {
        let mut doctor = DoctorRecord::new("doc-1", "Dr. Ayesha Rahman", "ayesha@example.com")
            .with_specialties(assignments);
        doctor.gender = Some(Gender::Female);
        doctor
    }

    #[test]
    fn new_record_fills_empty_defaults() {
        let doctor = DoctorRecord::new("doc-1", "Dr. Test", "doc@example.com");

        assert_eq!(doctor.id, DoctorId::new("doc-1"));
        assert!(doctor.contact_number.is_empty());
        assert!(doctor.gender.is_none());
        assert_eq!(doctor.appointment_fee, 0);
        assert!(doctor.doctor_specialties.is_empty());
        assert!(doctor.specialty_ids().is_empty());
    }

    #[test]
    fn specialty_ids_extracts_populated_entries() {
        let doctor = bare_doctor(vec![
            SpecialtyAssignment::of("spec-a"),
            SpecialtyAssignment::of("spec-b"),
        ]);

        let ids = doctor.specialty_ids();
        assert_eq!(ids, vec![SpecialtyId::new("spec-a"), SpecialtyId::new("spec-b")]);
    }

    #[test]
    fn specialty_ids_drops_entries_without_an_id() {
        let doctor = bare_doctor(vec![
            SpecialtyAssignment::of("spec-a"),
            SpecialtyAssignment { specialities_id: None, specialities: None },
            SpecialtyAssignment::of("spec-c"),
        ]);

        // The entry with no id carries no usable specialty — it must vanish.
        let ids = doctor.specialty_ids();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids, vec![SpecialtyId::new("spec-a"), SpecialtyId::new("spec-c")]);
    }

    #[test]
    fn doctor_record_deserializes_backend_shape() {
        let json = serde_json::json!({
            "id": "d-100",
            "name": "Dr. Test",
            "email": "t@example.com",
            "doctorSpecialties": [
                { "specialitiesId": "s-1" },
                { }
            ]
        });

        let doctor: DoctorRecord = serde_json::from_value(json).unwrap();
        assert_eq!(doctor.specialty_ids(), vec![SpecialtyId::new("s-1")]);
        assert!(doctor.gender.is_none());
    }

    // ── Status enum wire spellings ───────────────────────────────────────────

    #[test]
    fn appointment_status_uses_backend_spelling() {
        // "INPROGRESS" has no separator on the wire.
        let json = serde_json::to_string(&AppointmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"INPROGRESS\"");

        let decoded: AppointmentStatus = serde_json::from_str("\"CANCELED\"").unwrap();
        assert_eq!(decoded, AppointmentStatus::Canceled);
    }

    #[test]
    fn appointment_status_round_trips() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::InProgress,
            AppointmentStatus::Completed,
            AppointmentStatus::Canceled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let decoded: AppointmentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, decoded);
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn payment_status_round_trips() {
        let json = serde_json::to_string(&PaymentStatus::Paid).unwrap();
        assert_eq!(json, "\"PAID\"");
        let decoded: PaymentStatus = serde_json::from_str("\"UNPAID\"").unwrap();
        assert_eq!(decoded, PaymentStatus::Unpaid);
    }

    #[test]
    fn gender_uses_backend_spelling() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"MALE\"");
        let decoded: Gender = serde_json::from_str("\"FEMALE\"").unwrap();
        assert_eq!(decoded, Gender::Female);
    }

    // ── MedibookError display messages ───────────────────────────────────────

    #[test]
    fn error_validation_failed_display() {
        let err = MedibookError::ValidationFailed {
            reason: "name: Name must be at least 3 characters long".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("form validation failed"));
        assert!(msg.contains("at least 3 characters"));
    }

    #[test]
    fn error_request_failed_display() {
        let err = MedibookError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("backend request failed"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn error_invalidation_failed_display() {
        let err = MedibookError::InvalidationFailed {
            tag: "doctors-list".to_string(),
            reason: "store unavailable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("doctors-list"));
        assert!(msg.contains("store unavailable"));
    }

    #[test]
    fn error_config_error_display() {
        let err = MedibookError::ConfigError {
            reason: "missing schema file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing schema file"));
    }
}
