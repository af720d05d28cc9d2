//! The patient intake snapshot.
//!
//! `PatientData` is created once at intake and never mutated. Every engine
//! component reads from it by reference; none writes back. Callers are
//! responsible for validating ranges before construction (see nephra-intake) —
//! the types here carry no validation logic of their own.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Biological sex used by the CKD-EPI equation and the anemia thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
}

/// Smoking status, graded because former smokers carry partial risk weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

/// Condition tags referenced by the risk-score factor tables.
///
/// Stored in a `BTreeSet` so iteration order — and therefore every
/// computation touching conditions — is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Diabetes,
    Hypertension,
    HeartDisease,
    KidneyStones,
    Gout,
    UtiHistory,
}

/// Demographic fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    /// Age in whole years.
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Vital signs recorded at intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Systolic blood pressure, mmHg.
    pub systolic_bp: f64,
    /// Diastolic blood pressure, mmHg.
    pub diastolic_bp: f64,
    /// Fasting glucose, mg/dL.
    pub glucose: f64,
}

/// Full serum panel. All values in conventional US units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerumPanel {
    /// Serum creatinine, mg/dL. Must be > 0 — GFR and the BUN/creatinine
    /// ratio divide by it, and the engine does not guard the division.
    pub creatinine: f64,
    /// Blood urea nitrogen, mg/dL.
    pub bun: f64,
    /// mg/dL
    pub calcium: f64,
    /// mEq/L
    pub potassium: f64,
    /// mEq/L
    pub sodium: f64,
    /// mg/dL
    pub phosphorus: f64,
    /// g/dL
    pub albumin: f64,
    /// mg/dL
    pub uric_acid: f64,
    /// g/dL
    pub hemoglobin: f64,
    /// Percent.
    pub hba1c: f64,
    /// Total cholesterol, mg/dL.
    pub cholesterol: f64,
    /// mg/dL
    pub triglycerides: f64,
}

/// Urine damage markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrineMarkers {
    /// Urine protein excretion, mg/day.
    pub protein_mg_day: f64,
    /// Urine albumin excretion, mg/day. Drives the albuminuria category.
    pub albumin_mg_day: f64,
}

/// Bone-mineral and inflammation markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralInflammationMarkers {
    /// Parathyroid hormone, pg/mL.
    pub pth: f64,
    /// 25-hydroxy vitamin D, ng/mL.
    pub vitamin_d: f64,
    /// C-reactive protein, mg/L.
    pub crp: f64,
}

/// Lifestyle fields, both as intake values and as the field set a
/// simulation run may request adjustments against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    /// Self-reported hydration, 1–10.
    pub hydration_level: f64,
    /// Weekly exercise level, 0–10.
    pub exercise_level: f64,
    /// Dietary protein, g/day.
    pub protein_intake_g: f64,
    /// Dietary salt, g/day.
    pub salt_intake_g: f64,
    /// Water intake, L/day.
    pub water_intake_l: f64,
    pub smoking: SmokingStatus,
    /// Alcohol consumption, units/week.
    pub alcohol_units_week: f64,
}

/// The immutable patient snapshot every engine call reads from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientData {
    pub demographics: Demographics,
    pub vitals: Vitals,
    pub serum: SerumPanel,
    pub urine: UrineMarkers,
    pub markers: MineralInflammationMarkers,
    /// Unordered set of condition tags.
    #[serde(default)]
    pub conditions: BTreeSet<Condition>,
    /// Current medicines as free-text names, in intake order.
    #[serde(default)]
    pub medicines: Vec<String>,
    pub lifestyle: Lifestyle,
}

impl PatientData {
    /// Return true if the patient carries the given condition tag.
    pub fn has_condition(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }
}
