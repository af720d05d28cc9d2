//! Scenario 6: Report Assembly
//!
//! Assembles the frozen `AssessmentReport` bundle the way an export
//! surface would consume it: baseline, simulated snapshot, interactions,
//! rankings, and one independent projection per fixed horizon. The bundle
//! is printed as JSON — formatting and rasterizing are the export
//! collaborator's job, not the engine's.

use chrono::Utc;

use nephra_contracts::error::NephraResult;
use nephra_contracts::patient::PatientData;
use nephra_contracts::report::{AssessmentReport, ProjectionPoint, PROJECTION_HORIZONS_DAYS};
use nephra_metrics::calculate_baseline;
use nephra_rank::rank;
use nephra_sim::{project, TreatmentSimulator};

use super::{demo_adjustments, demo_pool, demo_treatments};

/// Run Scenario 6: Report Assembly.
pub fn run_scenario(patient: &PatientData) -> NephraResult<()> {
    println!("=== Scenario 6: Report Assembly ===");
    println!();

    let simulator = TreatmentSimulator::builtin();
    let baseline = calculate_baseline(patient);
    let treatments = demo_treatments();
    let adjustments = demo_adjustments(patient);

    let simulated = simulator.simulate(&baseline, patient, &treatments, &adjustments);
    let interactions = simulator.detect_interactions(&treatments);
    let rankings = rank(&simulator, &baseline, patient, &demo_pool())?;

    // Each horizon projects the simulated snapshot independently.
    let projections: Vec<ProjectionPoint> = PROJECTION_HORIZONS_DAYS
        .into_iter()
        .map(|days_ahead| ProjectionPoint {
            days_ahead,
            metrics: project(&simulated, days_ahead),
        })
        .collect();

    let report = AssessmentReport {
        patient: patient.clone(),
        baseline,
        simulated,
        treatments,
        adjustments,
        interactions,
        rankings,
        projections,
        generated_at: Utc::now(),
    };

    let json = serde_json::to_string_pretty(&report).expect("report bundle serializes");
    println!("{}", json);
    println!();
    println!("  Scenario 6 complete.");
    println!();

    Ok(())
}
