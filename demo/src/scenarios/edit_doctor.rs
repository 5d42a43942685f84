//! Scenario 1: Edit a doctor's specialties.
//!
//! Walks the selection session through the reconciliation cases that make
//! it interesting:
//!
//! - removing an originally-assigned specialty marks it for detachment
//! - re-adding it cancels the pending removal
//! - a newly added specialty appears in the attach list only
//!
//! then saves through the real coordinator, showing the PATCH payload and
//! the cache tags invalidated afterwards.

use medibook_contracts::error::MedibookResult;
use medibook_contracts::specialty::SpecialtyId;
use medibook_core::{SaveCoordinator, SaveOutcome};
use medibook_selection::SelectionLifecycle;
use serde_json::json;

use crate::mock::{ConsoleCache, ConsoleClient};
use crate::scenarios::{sample_doctor, specialty_catalog, CARDIOLOGY, DERMATOLOGY};

pub fn run_scenario() -> MedibookResult<()> {
    println!("Scenario 1: Edit Doctor — specialty reconciliation");
    println!("--------------------------------------------------");

    let doctor = sample_doctor();
    let catalog = specialty_catalog();

    let mut lifecycle = SelectionLifecycle::new();
    lifecycle.sync(true, true, Some(&doctor));
    println!(
        "  dialog opened in edit mode, selection seeded with {} specialties",
        lifecycle.session().selected().len()
    );
    print_candidates(lifecycle.session().available_candidates(&catalog));

    // Deselect an original specialty.
    let session = lifecycle.session_mut();
    session.remove(&SpecialtyId::new(CARDIOLOGY));
    println!("  removed Cardiology → removal list: {:?}", id_list(session.removed()));

    // Add a brand-new one.
    session.set_pending_choice(SpecialtyId::new(DERMATOLOGY));
    session.confirm_add();
    println!("  added Dermatology  → attach list:  {:?}", id_list(&session.net_new_specialties()));

    // Change of heart: re-adding the original cancels its removal.
    session.set_pending_choice(SpecialtyId::new(CARDIOLOGY));
    session.confirm_add();
    println!("  re-added Cardiology → removal list: {:?}", id_list(session.removed()));

    println!("  saving:");
    let coordinator = SaveCoordinator::new(Box::new(ConsoleClient), Box::new(ConsoleCache))?;
    let outcome = coordinator.update_doctor(
        &doctor.id,
        &json!({ "appointmentFee": 2000 }),
        lifecycle.session(),
    )?;

    match outcome {
        SaveOutcome::Saved { invalidated, .. } => {
            println!("  saved, {} cache tags invalidated", invalidated.len());
        }
        SaveOutcome::Rejected { report } => {
            println!("  rejected: {}", report.summary());
        }
    }

    // Closing the dialog discards the session.
    lifecycle.sync(false, false, None);
    println!(
        "  dialog closed, selection reset ({} selected)",
        lifecycle.session().selected().len()
    );
    println!();
    Ok(())
}

fn print_candidates(candidates: Vec<&medibook_contracts::specialty::Specialty>) {
    let titles: Vec<&str> = candidates.iter().map(|s| s.title.as_str()).collect();
    println!("  available candidates: {titles:?}");
}

fn id_list(ids: &[SpecialtyId]) -> Vec<&str> {
    ids.iter().map(|id| id.as_str()).collect()
}
