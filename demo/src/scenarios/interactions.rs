//! Scenario 2: Interaction Detection
//!
//! Classifies a treatment list against the drug lexicon and checks every
//! unordered pair against the interaction table — including the known-bad
//! dual RAAS blockade pair.

use nephra_contracts::error::NephraResult;
use nephra_contracts::patient::PatientData;
use nephra_contracts::treatment::Treatment;
use nephra_pharma::{DrugLexicon, InteractionTable};

/// Run Scenario 2: Interaction Detection.
pub fn run_scenario(_patient: &PatientData) -> NephraResult<()> {
    println!("=== Scenario 2: Interaction Detection ===");
    println!();

    let lexicon = DrugLexicon::builtin();
    let table = InteractionTable::builtin();

    // A deliberately hazardous list: ACE + ARB + NSAID.
    let treatments = vec![
        Treatment::new("Lisinopril 10mg", "10 mg", "once daily", 1),
        Treatment::new("Losartan 50mg", "50 mg", "once daily", 1),
        Treatment::new("Ibuprofen 400mg", "400 mg", "three times daily", 3),
        Treatment::new("herbal tonic", "one scoop", "daily", 1),
    ];

    println!("  Treatment list:");
    for treatment in &treatments {
        let class = lexicon
            .classify(&treatment.medicine)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unclassified".to_string());
        println!("    {:24} → {}", treatment.medicine, class);
    }
    println!();

    let found = table.detect(&lexicon, &treatments);
    println!("  Detected {} interaction(s):", found.len());
    for interaction in &found {
        println!(
            "    [{}] {} — {} + {}",
            interaction.severity, interaction.description, interaction.medicine_a,
            interaction.medicine_b
        );
        println!("          {}", interaction.effect);
    }
    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
