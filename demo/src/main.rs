//! medibook Admin Dashboard — Demo CLI
//!
//! Runs one or all of the three admin-flow scenarios. Each scenario uses
//! real medibook components (selection session, form validator, save
//! coordinator) wired to console mocks for the backend and the cache.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- edit-doctor
//!   cargo run -p demo -- create-doctor
//!   cargo run -p demo -- validate-forms

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod mock;
mod scenarios;

use scenarios::{create_doctor, edit_doctor, validate_forms};

// ── CLI definition ────────────────────────────────────────────────────────────

/// medibook — healthcare booking admin dashboard demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "medibook admin dashboard demo",
    long_about = "Runs medibook admin scenarios showing specialty selection\n\
                  reconciliation, schema-driven form validation, and the\n\
                  save pipeline with cache-tag invalidation."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three admin scenarios in sequence.
    RunAll,
    /// Scenario 1: Edit Doctor (specialty selection reconciliation).
    EditDoctor,
    /// Scenario 2: Create Doctor (validation gate + nested payload).
    CreateDoctor,
    /// Scenario 3: Form Validation (schedule cross-checks, status values).
    ValidateForms,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::EditDoctor => edit_doctor::run_scenario(),
        Command::CreateDoctor => create_doctor::run_scenario(),
        Command::ValidateForms => validate_forms::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_all() -> medibook_contracts::error::MedibookResult<()> {
    edit_doctor::run_scenario()?;
    create_doctor::run_scenario()?;
    validate_forms::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("medibook — Healthcare Booking Admin Dashboard");
    println!("Admin Flow Demo");
    println!("=============================================");
    println!();
    println!("Save pipeline per write:");
    println!("  [1] Selection session reconciles specialties → attach / detach lists");
    println!("  [2] TOML form schema validates the payload — failures never dispatch");
    println!("  [3] Backend payload built and sent through the ApiClient seam");
    println!("  [4] On confirmation, every affected cache tag is invalidated");
    println!();
}
