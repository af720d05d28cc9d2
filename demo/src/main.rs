//! NEPHRA — Kidney-Health Assessment Engine Demo CLI
//!
//! Runs one or all of the engine scenarios over a sample patient (or an
//! intake JSON supplied with `--input`). Each scenario wires real NEPHRA
//! components — intake validator, metrics calculator, simulator,
//! interaction detector, ranker, time projection — end to end.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- baseline
//!   cargo run -p demo -- simulate
//!   cargo run -p demo -- rank
//!   cargo run -p demo -- report --input my_patient.json

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nephra_contracts::error::{NephraError, NephraResult};
use nephra_contracts::patient::PatientData;
use nephra_intake::IntakeValidator;

mod scenarios;

/// The built-in sample patient: a 62-year-old male with early CKD,
/// diabetes, hypertension, and gout. Entirely fictional.
const SAMPLE_PATIENT: &str = include_str!("../data/sample_patient.json");

// ── CLI definition ────────────────────────────────────────────────────────────

/// NEPHRA — deterministic kidney-health assessment engine demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "NEPHRA assessment engine demo",
    long_about = "Runs NEPHRA engine scenarios: baseline assessment, interaction\n\
                  detection, treatment simulation, time projection, treatment\n\
                  ranking, and full report assembly."
)]
struct Cli {
    /// Path to an intake JSON document. Defaults to the built-in sample.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every scenario in sequence.
    RunAll,
    /// Derive and print the baseline assessment.
    Baseline,
    /// Detect interactions within the demo treatment list.
    Interactions,
    /// Simulate the demo treatments and lifestyle adjustments.
    Simulate,
    /// Project the baseline across the fixed horizon set.
    Project,
    /// Rank treatment combinations from the demo pool.
    Rank,
    /// Assemble the full assessment report bundle as JSON.
    Report,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Structured logging; set RUST_LOG=debug for verbose engine tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = load_patient(cli.input.as_deref()).and_then(|patient| match cli.command {
        Command::RunAll => run_all(&patient),
        Command::Baseline => scenarios::baseline::run_scenario(&patient),
        Command::Interactions => scenarios::interactions::run_scenario(&patient),
        Command::Simulate => scenarios::simulation::run_scenario(&patient),
        Command::Project => scenarios::projection::run_scenario(&patient),
        Command::Rank => scenarios::ranking::run_scenario(&patient),
        Command::Report => scenarios::report::run_scenario(&patient),
    });

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

/// Load and validate the patient snapshot from `--input` or the sample.
fn load_patient(input: Option<&std::path::Path>) -> NephraResult<PatientData> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| NephraError::InvalidInput {
            field: "input".to_string(),
            reason: format!("failed to read '{}': {}", path.display(), e),
        })?,
        None => SAMPLE_PATIENT.to_string(),
    };
    IntakeValidator::new().parse_patient(&json)
}

fn run_all(patient: &PatientData) -> NephraResult<()> {
    scenarios::baseline::run_scenario(patient)?;
    scenarios::interactions::run_scenario(patient)?;
    scenarios::simulation::run_scenario(patient)?;
    scenarios::projection::run_scenario(patient)?;
    scenarios::ranking::run_scenario(patient)?;
    scenarios::report::run_scenario(patient)?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("NEPHRA — Kidney-Health Assessment Engine");
    println!("Demo Scenarios");
    println!("========================================");
    println!();
    println!("Engine pipeline per simulation run:");
    println!("  [1] Intake validation (JSON Schema + semantic range rules)");
    println!("  [2] Metrics calculator derives the baseline assessment");
    println!("  [3] Simulator applies drug-class effect bundles + lifestyle deltas");
    println!("  [4] Interaction detector checks every treatment pair");
    println!("  [5] Time projection / ranker consume the resulting snapshots");
    println!();
}
