//! Scenario 1: Baseline Assessment
//!
//! Derives the full multi-dimensional assessment from the patient snapshot
//! and prints the headline metrics, score panel, and risk heatmap.

use nephra_contracts::error::NephraResult;
use nephra_contracts::patient::PatientData;
use nephra_metrics::calculate_baseline;

/// Run Scenario 1: Baseline Assessment.
pub fn run_scenario(patient: &PatientData) -> NephraResult<()> {
    println!("=== Scenario 1: Baseline Assessment ===");
    println!();

    let metrics = calculate_baseline(patient);

    println!(
        "  Patient: {} y/o, creatinine {:.2} mg/dL, {} condition(s), {} medicine(s)",
        patient.demographics.age,
        patient.serum.creatinine,
        patient.conditions.len(),
        patient.medicines.len()
    );
    println!();
    println!(
        "  GFR:                  {:.1} mL/min  ({} / stage {}, albuminuria {})",
        metrics.gfr, metrics.gfr_category, metrics.ckd_stage, metrics.albuminuria_category
    );
    println!("  Efficiency:           {:.1}", metrics.efficiency);
    println!("  Kidney biological age: {:.0} years", metrics.kidney_biological_age);
    println!();
    println!("  Risk scores (higher is worse):");
    println!("    Stone risk:          {:.1}", metrics.stone_risk);
    println!("    Stress index:        {:.1}", metrics.stress_index);
    println!("    CKD progression:     {:.1}", metrics.ckd_progression_risk);
    println!("    Cardiovascular:      {:.1}", metrics.cardiovascular_risk);
    println!("    AKI:                 {:.1}", metrics.aki_risk);
    println!("    Infection:           {:.1}", metrics.infection_risk);
    println!();
    println!("  Health scores (higher is better):");
    println!("    Electrolyte balance: {:.1}", metrics.electrolyte_balance);
    println!("    Mineral-bone:        {:.1}", metrics.mineral_bone_score);
    println!("    Anemia:              {:.1}", metrics.anemia_score);
    println!("    Inflammation:        {:.1}", metrics.inflammation_score);
    println!("    Perfusion:           {:.1}", metrics.perfusion_index);
    println!("    Nephron health:      {:.1}", metrics.nephron_health);
    println!("    Interstitial:        {:.1}", metrics.interstitial_health);
    println!("    Vascular:            {:.1}", metrics.vascular_health);
    println!();
    println!("  Risk heatmap:");
    println!("    Glomerular:          {:.1}", metrics.heatmap.glomerular);
    println!("    Nephron:             {:.1}", metrics.heatmap.nephron);
    println!("    Cortex:              {:.1}", metrics.heatmap.cortex);
    println!("    Medulla:             {:.1}", metrics.heatmap.medulla);
    println!("    Interstitial:        {:.1}", metrics.heatmap.interstitial);
    println!("    Collecting system:   {:.1}", metrics.heatmap.collecting_system);
    println!("    Vascular:            {:.1}", metrics.heatmap.vascular);
    println!();
    println!("  Overall health score:  {:.0}", metrics.overall_health_score);
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
