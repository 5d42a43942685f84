//! Scenario 2: Create a doctor.
//!
//! Shows the full write pipeline for the create flow: an invalid payload is
//! rejected before any request is sent, then a corrected payload with a
//! confirmed specialty selection goes out as the nested backend shape and
//! invalidates the doctor read tags.

use medibook_contracts::error::MedibookResult;
use medibook_contracts::specialty::SpecialtyId;
use medibook_core::{SaveCoordinator, SaveOutcome};
use medibook_selection::SelectionSession;
use serde_json::json;

use crate::mock::{ConsoleCache, ConsoleClient};
use crate::scenarios::NEUROLOGY;

pub fn run_scenario() -> MedibookResult<()> {
    println!("Scenario 2: Create Doctor — validation gate and dispatch");
    println!("--------------------------------------------------------");

    let coordinator = SaveCoordinator::new(Box::new(ConsoleClient), Box::new(ConsoleCache))?;

    let mut selection = SelectionSession::for_create();
    selection.set_pending_choice(SpecialtyId::new(NEUROLOGY));
    selection.confirm_add();

    // First attempt: too-short password, missing required fields.
    println!("  submitting an incomplete form:");
    let outcome = coordinator.create_doctor(
        &json!({ "name": "Dr. Imran Chowdhury", "password": "abc" }),
        &selection,
    )?;
    if let SaveOutcome::Rejected { report } = outcome {
        println!("  rejected without any backend call:");
        for error in &report.errors {
            println!("    - {}: {}", error.path, error.message);
        }
    }

    // Second attempt: the complete form.
    println!("  submitting the corrected form:");
    let outcome = coordinator.create_doctor(
        &json!({
            "password": "s3cret-pass",
            "name": "Dr. Imran Chowdhury",
            "email": "imran@clinic.example",
            "contactNumber": "01811113333",
            "registrationNumber": "REG-7788",
            "gender": "MALE",
            "appointmentFee": 1200,
            "qualification": "MBBS",
            "currentWorkingPlace": "Green Life Hospital",
            "designation": "Registrar"
        }),
        &selection,
    )?;

    match outcome {
        SaveOutcome::Saved { response, invalidated } => {
            println!(
                "  saved (backend said: \"{}\"), {} cache tags invalidated",
                response.message,
                invalidated.len()
            );
        }
        SaveOutcome::Rejected { report } => {
            println!("  unexpectedly rejected: {}", report.summary());
        }
    }
    println!();
    Ok(())
}
