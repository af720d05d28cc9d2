//! The intake document and its clinically neutral defaults.
//!
//! An intake form may omit any numeric field except age, gender, and serum
//! creatinine. Omitted fields default to clinically neutral values — values
//! at which every penalty term in the metrics calculator contributes zero —
//! so a sparse document still produces a meaningful baseline. The
//! defaulting happens here, on the caller's side of the engine boundary;
//! `PatientData` itself carries no defaults.

use std::collections::BTreeSet;

use serde::Deserialize;

use nephra_contracts::patient::{
    Condition, Demographics, Gender, Lifestyle, MineralInflammationMarkers, PatientData,
    SerumPanel, SmokingStatus, UrineMarkers, Vitals,
};

#[derive(Debug, Deserialize)]
pub struct DemographicsDoc {
    pub age: u32,
    pub gender: Gender,
    #[serde(default = "defaults::weight_kg")]
    pub weight_kg: f64,
    #[serde(default = "defaults::height_cm")]
    pub height_cm: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VitalsDoc {
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub glucose: f64,
}

impl Default for VitalsDoc {
    fn default() -> Self {
        Self {
            systolic_bp: 120.0,
            diastolic_bp: 80.0,
            glucose: 95.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SerumDoc {
    pub creatinine: f64,
    #[serde(default = "defaults::bun")]
    pub bun: f64,
    #[serde(default = "defaults::calcium")]
    pub calcium: f64,
    #[serde(default = "defaults::potassium")]
    pub potassium: f64,
    #[serde(default = "defaults::sodium")]
    pub sodium: f64,
    #[serde(default = "defaults::phosphorus")]
    pub phosphorus: f64,
    #[serde(default = "defaults::albumin")]
    pub albumin: f64,
    #[serde(default = "defaults::uric_acid")]
    pub uric_acid: f64,
    #[serde(default = "defaults::hemoglobin")]
    pub hemoglobin: f64,
    #[serde(default = "defaults::hba1c")]
    pub hba1c: f64,
    #[serde(default = "defaults::cholesterol")]
    pub cholesterol: f64,
    #[serde(default = "defaults::triglycerides")]
    pub triglycerides: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UrineDoc {
    pub protein_mg_day: f64,
    pub albumin_mg_day: f64,
}

impl Default for UrineDoc {
    fn default() -> Self {
        Self {
            protein_mg_day: 80.0,
            albumin_mg_day: 10.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkersDoc {
    pub pth: f64,
    pub vitamin_d: f64,
    pub crp: f64,
}

impl Default for MarkersDoc {
    fn default() -> Self {
        Self {
            pth: 45.0,
            vitamin_d: 35.0,
            crp: 1.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LifestyleDoc {
    pub hydration_level: f64,
    pub exercise_level: f64,
    pub protein_intake_g: f64,
    pub salt_intake_g: f64,
    pub water_intake_l: f64,
    pub smoking: SmokingStatus,
    pub alcohol_units_week: f64,
}

impl Default for LifestyleDoc {
    fn default() -> Self {
        Self {
            hydration_level: 6.0,
            exercise_level: 4.0,
            protein_intake_g: 70.0,
            salt_intake_g: 5.0,
            water_intake_l: 2.0,
            smoking: SmokingStatus::Never,
            alcohol_units_week: 0.0,
        }
    }
}

/// The intake document as submitted by a form.
#[derive(Debug, Deserialize)]
pub struct IntakeDocument {
    pub demographics: DemographicsDoc,
    #[serde(default)]
    pub vitals: VitalsDoc,
    pub serum: SerumDoc,
    #[serde(default)]
    pub urine: UrineDoc,
    #[serde(default)]
    pub markers: MarkersDoc,
    #[serde(default)]
    pub conditions: BTreeSet<Condition>,
    #[serde(default)]
    pub medicines: Vec<String>,
    #[serde(default)]
    pub lifestyle: LifestyleDoc,
}

impl IntakeDocument {
    /// Freeze the document into the immutable engine snapshot.
    pub fn into_patient(self) -> PatientData {
        PatientData {
            demographics: Demographics {
                age: self.demographics.age,
                gender: self.demographics.gender,
                weight_kg: self.demographics.weight_kg,
                height_cm: self.demographics.height_cm,
            },
            vitals: Vitals {
                systolic_bp: self.vitals.systolic_bp,
                diastolic_bp: self.vitals.diastolic_bp,
                glucose: self.vitals.glucose,
            },
            serum: SerumPanel {
                creatinine: self.serum.creatinine,
                bun: self.serum.bun,
                calcium: self.serum.calcium,
                potassium: self.serum.potassium,
                sodium: self.serum.sodium,
                phosphorus: self.serum.phosphorus,
                albumin: self.serum.albumin,
                uric_acid: self.serum.uric_acid,
                hemoglobin: self.serum.hemoglobin,
                hba1c: self.serum.hba1c,
                cholesterol: self.serum.cholesterol,
                triglycerides: self.serum.triglycerides,
            },
            urine: UrineMarkers {
                protein_mg_day: self.urine.protein_mg_day,
                albumin_mg_day: self.urine.albumin_mg_day,
            },
            markers: MineralInflammationMarkers {
                pth: self.markers.pth,
                vitamin_d: self.markers.vitamin_d,
                crp: self.markers.crp,
            },
            conditions: self.conditions,
            medicines: self.medicines,
            lifestyle: Lifestyle {
                hydration_level: self.lifestyle.hydration_level,
                exercise_level: self.lifestyle.exercise_level,
                protein_intake_g: self.lifestyle.protein_intake_g,
                salt_intake_g: self.lifestyle.salt_intake_g,
                water_intake_l: self.lifestyle.water_intake_l,
                smoking: self.lifestyle.smoking,
                alcohol_units_week: self.lifestyle.alcohol_units_week,
            },
        }
    }
}

mod defaults {
    pub fn weight_kg() -> f64 {
        75.0
    }
    pub fn height_cm() -> f64 {
        170.0
    }
    pub fn bun() -> f64 {
        14.0
    }
    pub fn calcium() -> f64 {
        9.5
    }
    pub fn potassium() -> f64 {
        4.2
    }
    pub fn sodium() -> f64 {
        140.0
    }
    pub fn phosphorus() -> f64 {
        3.5
    }
    pub fn albumin() -> f64 {
        4.2
    }
    pub fn uric_acid() -> f64 {
        5.0
    }
    pub fn hemoglobin() -> f64 {
        14.0
    }
    pub fn hba1c() -> f64 {
        5.4
    }
    pub fn cholesterol() -> f64 {
        180.0
    }
    pub fn triglycerides() -> f64 {
        120.0
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_document_gets_neutral_defaults() {
        let json = r#"{
            "demographics": { "age": 50, "gender": "male" },
            "serum": { "creatinine": 1.0 }
        }"#;
        let doc: IntakeDocument = serde_json::from_str(json).unwrap();
        let patient = doc.into_patient();

        assert_eq!(patient.vitals.systolic_bp, 120.0);
        assert_eq!(patient.serum.potassium, 4.2);
        assert_eq!(patient.markers.vitamin_d, 35.0);
        assert_eq!(patient.lifestyle.hydration_level, 6.0);
        assert!(patient.conditions.is_empty());
        assert!(patient.medicines.is_empty());
    }

    #[test]
    fn provided_fields_override_defaults() {
        let json = r#"{
            "demographics": { "age": 61, "gender": "female", "weight_kg": 62.5 },
            "serum": { "creatinine": 1.4, "uric_acid": 7.2 },
            "lifestyle": { "hydration_level": 3, "smoking": "current" },
            "conditions": ["diabetes", "gout"],
            "medicines": ["Metformin 500mg"]
        }"#;
        let doc: IntakeDocument = serde_json::from_str(json).unwrap();
        let patient = doc.into_patient();

        assert_eq!(patient.demographics.weight_kg, 62.5);
        assert_eq!(patient.serum.uric_acid, 7.2);
        assert_eq!(patient.lifestyle.hydration_level, 3.0);
        assert_eq!(patient.lifestyle.smoking, SmokingStatus::Current);
        assert_eq!(patient.conditions.len(), 2);
        assert_eq!(patient.medicines.len(), 1);
    }
}
