//! Treatments, lifestyle adjustments, and ranking results.

use serde::{Deserialize, Serialize};

use crate::patient::PatientData;

/// Unique identifier for a treatment entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreatmentId(pub uuid::Uuid);

impl TreatmentId {
    /// Create a new, unique treatment ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for TreatmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A candidate or active treatment. Created by the caller, immutable once
/// passed into the engine.
///
/// `medicine` is free text; classification against the drug lexicon happens
/// inside the engine. An unrecognized name is not an error — it simply
/// contributes no dosed effect and no interaction checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    #[serde(default)]
    pub id: TreatmentId,
    /// Free-text medicine name, e.g. "Lisinopril 10mg".
    pub medicine: String,
    /// Dosage as entered, e.g. "10 mg".
    pub dosage: String,
    /// Frequency as entered, e.g. "once daily".
    pub frequency: String,
    /// Tablets per day, >= 1. Therapeutic effect saturates at 3.
    pub tablets_per_day: u32,
    /// Optional display-only category tag. Never read by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Treatment {
    /// Convenience constructor for the common case.
    pub fn new(medicine: impl Into<String>, dosage: impl Into<String>, frequency: impl Into<String>, tablets_per_day: u32) -> Self {
        Self {
            id: TreatmentId::new(),
            medicine: medicine.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            tablets_per_day,
            category: None,
        }
    }
}

/// Requested lifestyle values for a simulation run.
///
/// The simulator reacts to the *difference* between these values and the
/// patient's intake lifestyle — identical values are a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleAdjustments {
    pub hydration_level: f64,
    pub exercise_level: f64,
    pub protein_intake_g: f64,
    pub salt_intake_g: f64,
    pub water_intake_l: f64,
}

impl LifestyleAdjustments {
    /// The no-op adjustment: the patient's own intake lifestyle values.
    pub fn from_patient(patient: &PatientData) -> Self {
        Self {
            hydration_level: patient.lifestyle.hydration_level,
            exercise_level: patient.lifestyle.exercise_level,
            protein_intake_g: patient.lifestyle.protein_intake_g,
            salt_intake_g: patient.lifestyle.salt_intake_g,
            water_intake_l: patient.lifestyle.water_intake_l,
        }
    }
}

/// One evaluated treatment combination, produced only by the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentRanking {
    /// The combination evaluated, in generation order.
    pub treatments: Vec<Treatment>,
    /// Composite ranking score; rankings sort descending on this.
    pub score: f64,
    /// Simulated GFR minus baseline GFR, mL/min.
    pub gfr_delta: f64,
    /// Weighted aggregate risk reduction across CKD-progression,
    /// cardiovascular, and stone risk.
    pub risk_reduction: f64,
    /// Penalty accrued from detected drug interactions.
    pub side_effect_penalty: f64,
    /// Number of detected interactions within the combination.
    pub interaction_count: usize,
    /// Short generated summary of why the combination scored as it did.
    pub reasoning: String,
}
