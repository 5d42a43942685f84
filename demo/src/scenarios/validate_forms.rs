//! Scenario 3: Schema-driven form validation.
//!
//! Runs payloads through the bundled TOML schemas directly, including the
//! schedule form's cross-field date/time ordering checks, then shows the
//! view-layer normalization of the resulting schedule slot.

use medibook_contracts::error::MedibookResult;
use medibook_contracts::schedule::Schedule;
use medibook_forms::{schemas, FormValidator};
use medibook_view::{display_date, format_duration, ScheduleWindow};
use serde_json::json;

pub fn run_scenario() -> MedibookResult<()> {
    println!("Scenario 3: Form Validation — schedule cross-checks");
    println!("---------------------------------------------------");

    let validator = FormValidator::new();
    let schema = schemas::schedule_create()?;

    // Same-day slot whose end precedes its start.
    let backwards = json!({
        "startDate": "2026-09-01",
        "endDate": "2026-09-01",
        "startTime": "14:00",
        "endTime": "12:30"
    });
    let report = validator.validate(&schema, &backwards);
    println!("  backwards same-day slot:");
    for error in &report.errors {
        println!("    - {}: {}", error.path, error.message);
    }

    // A valid slot passes every check.
    let valid = json!({
        "startDate": "2026-09-01",
        "endDate": "2026-09-01",
        "startTime": "09:00",
        "endTime": "11:30"
    });
    let report = validator.validate(&schema, &valid);
    println!("  valid slot passes: {}", report.passed);

    // The appointment status form only accepts the backend's spellings.
    let status_schema = schemas::appointment_status()?;
    let report = validator.validate(&status_schema, &json!({ "status": "DONE" }));
    println!("  status \"DONE\" rejected: {}", !report.passed);
    let report = validator.validate(&status_schema, &json!({ "status": "COMPLETED" }));
    println!("  status \"COMPLETED\" accepted: {}", report.passed);

    // View-layer normalization of the slot just validated.
    let schedule: Schedule = serde_json::from_value(valid).map_err(|e| {
        medibook_contracts::error::MedibookError::ValidationFailed {
            reason: format!("schedule payload did not deserialize: {e}"),
        }
    })?;
    let window = ScheduleWindow::from_schedule(&schedule);
    println!(
        "  rendered slot: {} — duration {}",
        display_date(window.start_date),
        window
            .duration_minutes()
            .map(format_duration)
            .unwrap_or_else(|| "N/A".to_string()),
    );
    println!();
    Ok(())
}
