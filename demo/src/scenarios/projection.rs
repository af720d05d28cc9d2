//! Scenario 4: Time Projection
//!
//! Projects the baseline snapshot across the fixed horizon set. Every
//! horizon is computed independently from the same starting snapshot.

use nephra_contracts::error::NephraResult;
use nephra_contracts::patient::PatientData;
use nephra_contracts::report::PROJECTION_HORIZONS_DAYS;
use nephra_metrics::calculate_baseline;
use nephra_sim::project;

/// Run Scenario 4: Time Projection.
pub fn run_scenario(patient: &PatientData) -> NephraResult<()> {
    println!("=== Scenario 4: Time Projection ===");
    println!();

    let baseline = calculate_baseline(patient);

    println!(
        "  {:>6}  {:>8}  {:>10}  {:>8}  {:>8}  {:>8}",
        "days", "GFR", "efficiency", "stress", "CKD risk", "overall"
    );
    println!(
        "  {:>6}  {:>8.1}  {:>10.1}  {:>8.1}  {:>8.1}  {:>8.0}",
        0,
        baseline.gfr,
        baseline.efficiency,
        baseline.stress_index,
        baseline.ckd_progression_risk,
        baseline.overall_health_score
    );

    for days in PROJECTION_HORIZONS_DAYS {
        let projected = project(&baseline, days);
        println!(
            "  {:>6}  {:>8.1}  {:>10.1}  {:>8.1}  {:>8.1}  {:>8.0}",
            days,
            projected.gfr,
            projected.efficiency,
            projected.stress_index,
            projected.ckd_progression_risk,
            projected.overall_health_score
        );
    }

    println!();
    println!("  Scenario 4 complete.");
    println!();

    Ok(())
}
