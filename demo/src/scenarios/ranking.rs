//! Scenario 5: Treatment Ranking
//!
//! Enumerates regimens of one to three drugs from the demo pool, simulates
//! each, and prints the top combinations with their reasoning lines. The
//! dual RAAS pair and the NSAID-heavy combinations sink to the bottom.

use nephra_contracts::error::NephraResult;
use nephra_contracts::patient::PatientData;
use nephra_metrics::calculate_baseline;
use nephra_rank::rank;
use nephra_sim::TreatmentSimulator;

use super::demo_pool;

/// Run Scenario 5: Treatment Ranking.
pub fn run_scenario(patient: &PatientData) -> NephraResult<()> {
    println!("=== Scenario 5: Treatment Ranking ===");
    println!();

    let simulator = TreatmentSimulator::builtin();
    let baseline = calculate_baseline(patient);
    let pool = demo_pool();

    println!("  Candidate pool ({} treatments):", pool.len());
    for treatment in &pool {
        println!("    {}", treatment.medicine);
    }
    println!();

    let rankings = rank(&simulator, &baseline, patient, &pool)?;

    println!("  Top {} combination(s):", rankings.len());
    for (position, ranking) in rankings.iter().enumerate() {
        let names: Vec<&str> = ranking
            .treatments
            .iter()
            .map(|t| t.medicine.as_str())
            .collect();
        println!(
            "  {:>2}. score {:>7.1}  gfr {:>+5.1}  risk {:>5.1}  interactions {}",
            position + 1,
            ranking.score,
            ranking.gfr_delta,
            ranking.risk_reduction,
            ranking.interaction_count
        );
        println!("      [{}]", names.join(" + "));
        println!("      {}", ranking.reasoning);
    }
    println!();
    println!("  Scenario 5 complete.");
    println!();

    Ok(())
}
