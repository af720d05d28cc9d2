//! Scenario 3: Treatment Simulation
//!
//! Applies the demo regimen and lifestyle adjustments to the baseline and
//! prints the before/after panel. Derived fields in the simulated snapshot
//! are recomputed from the new primaries, so staging moves with the GFR.

use nephra_contracts::error::NephraResult;
use nephra_contracts::patient::PatientData;
use nephra_metrics::calculate_baseline;
use nephra_sim::TreatmentSimulator;

use super::{demo_adjustments, demo_treatments};

/// Run Scenario 3: Treatment Simulation.
pub fn run_scenario(patient: &PatientData) -> NephraResult<()> {
    println!("=== Scenario 3: Treatment Simulation ===");
    println!();

    let simulator = TreatmentSimulator::builtin();
    let baseline = calculate_baseline(patient);
    let treatments = demo_treatments();
    let adjustments = demo_adjustments(patient);

    println!("  Regimen:");
    for treatment in &treatments {
        println!(
            "    {} — {} {}, {} tablet(s)/day",
            treatment.medicine, treatment.dosage, treatment.frequency, treatment.tablets_per_day
        );
    }
    println!(
        "  Lifestyle request: hydration {} → {}, water {:.1} → {:.1} L, salt {:.1} → {:.1} g",
        patient.lifestyle.hydration_level,
        adjustments.hydration_level,
        patient.lifestyle.water_intake_l,
        adjustments.water_intake_l,
        patient.lifestyle.salt_intake_g,
        adjustments.salt_intake_g
    );
    println!();

    let simulated = simulator.simulate(&baseline, patient, &treatments, &adjustments);

    let row = |name: &str, before: f64, after: f64| {
        println!("    {:22} {:8.1} → {:8.1}", name, before, after);
    };

    println!("  Baseline → simulated:");
    row("GFR", baseline.gfr, simulated.gfr);
    row("Efficiency", baseline.efficiency, simulated.efficiency);
    row("Stress index", baseline.stress_index, simulated.stress_index);
    row("Stone risk", baseline.stone_risk, simulated.stone_risk);
    row("CKD progression", baseline.ckd_progression_risk, simulated.ckd_progression_risk);
    row("Cardiovascular", baseline.cardiovascular_risk, simulated.cardiovascular_risk);
    row("Nephron health", baseline.nephron_health, simulated.nephron_health);
    row("Overall score", baseline.overall_health_score, simulated.overall_health_score);
    println!(
        "    {:22} {:>8} → {:>8}",
        "Stage",
        format!("{}", baseline.gfr_category),
        format!("{}", simulated.gfr_category)
    );
    println!();
    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
