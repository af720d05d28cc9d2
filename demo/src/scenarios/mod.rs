//! Demo scenarios.
//!
//! Each scenario is a self-contained module that wires real NEPHRA
//! components over the loaded patient snapshot and prints the returned
//! value objects. The shared helpers below define the demo regimen so the
//! simulation, ranking, and report scenarios all exercise the same inputs.

use nephra_contracts::patient::PatientData;
use nephra_contracts::treatment::{LifestyleAdjustments, Treatment};

pub mod baseline;
pub mod interactions;
pub mod projection;
pub mod ranking;
pub mod report;
pub mod simulation;

/// The demo treatment regimen: an ACE inhibitor plus an SGLT2 inhibitor.
pub fn demo_treatments() -> Vec<Treatment> {
    vec![
        Treatment::new("Lisinopril 10mg", "10 mg", "once daily", 1),
        Treatment::new("Empagliflozin 10mg", "10 mg", "once daily", 1),
    ]
}

/// A wider candidate pool for the ranking scenario, including a known-bad
/// combination (ACE + ARB) and a harmful agent (NSAID).
pub fn demo_pool() -> Vec<Treatment> {
    vec![
        Treatment::new("Lisinopril 10mg", "10 mg", "once daily", 1),
        Treatment::new("Losartan 50mg", "50 mg", "once daily", 1),
        Treatment::new("Empagliflozin 10mg", "10 mg", "once daily", 1),
        Treatment::new("Atorvastatin 20mg", "20 mg", "once daily", 1),
        Treatment::new("Allopurinol 300mg", "300 mg", "once daily", 1),
        Treatment::new("Ibuprofen 400mg", "400 mg", "three times daily", 3),
    ]
}

/// The demo lifestyle request: more hydration and water, less salt.
pub fn demo_adjustments(patient: &PatientData) -> LifestyleAdjustments {
    let mut adjustments = LifestyleAdjustments::from_patient(patient);
    adjustments.hydration_level = (adjustments.hydration_level + 2.0).min(10.0);
    adjustments.water_intake_l += 0.6;
    adjustments.salt_intake_g = adjustments.salt_intake_g.min(5.0);
    adjustments
}
