//! The penalty-accumulation score family.
//!
//! Every score follows one recurring pattern: start from a baseline
//! constant, add a weighted penalty for each risk factor that exceeds (or
//! falls below) its clinical threshold — magnitude proportional to the
//! excess — then clamp into [0, 100]. The factor sets and weights differ per
//! score and are normative contract values: changing one changes every
//! downstream assessment, simulation, and ranking.
//!
//! Risk scores read higher-is-worse; health scores start at 100 and
//! subtract, reading higher-is-better.

use nephra_contracts::patient::{Condition, Gender, PatientData, SmokingStatus};

use crate::{clamp_score, round1};

/// Medicine-name fragments treated as NSAIDs by the AKI factor table.
///
/// The baseline calculator is a pure function of the patient snapshot and
/// does not consult the drug lexicon, so it carries its own minimal name
/// list for this single factor.
const NSAID_NAMES: [&str; 8] = [
    "ibuprofen",
    "naproxen",
    "diclofenac",
    "ketorolac",
    "indomethacin",
    "celecoxib",
    "meloxicam",
    "aspirin",
];

/// True if any current medicine name contains an NSAID fragment.
fn takes_nsaid(patient: &PatientData) -> bool {
    patient.medicines.iter().any(|name| {
        let lowered = name.to_lowercase();
        NSAID_NAMES.iter().any(|fragment| lowered.contains(fragment))
    })
}

/// Kidney-stone formation risk.
///
/// Factors: uric acid, serum calcium, phosphorus, hydration, water intake,
/// stone/gout history, proteinuria.
pub fn stone_risk(patient: &PatientData) -> f64 {
    let mut risk = 8.0;

    let serum = &patient.serum;
    if serum.uric_acid > 6.0 {
        risk += (serum.uric_acid - 6.0) * 12.0;
    }
    if serum.calcium > 10.2 {
        risk += (serum.calcium - 10.2) * 15.0;
    }
    if serum.phosphorus > 4.5 {
        risk += (serum.phosphorus - 4.5) * 10.0;
    }

    let lifestyle = &patient.lifestyle;
    if lifestyle.hydration_level < 5.0 {
        risk += (5.0 - lifestyle.hydration_level) * 8.0;
    }
    if lifestyle.water_intake_l < 2.0 {
        risk += (2.0 - lifestyle.water_intake_l) * 10.0;
    }

    if patient.has_condition(Condition::KidneyStones) {
        risk += 20.0;
    }
    if patient.has_condition(Condition::Gout) {
        risk += 12.0;
    }
    if patient.urine.protein_mg_day > 150.0 {
        risk += 8.0;
    }

    round1(clamp_score(risk))
}

/// Systemic stress index over the kidney.
///
/// Factors: blood pressure, glucose, HbA1c, diabetes/hypertension flags,
/// salt intake, CRP, smoking, alcohol, protein intake, cholesterol.
pub fn stress_index(patient: &PatientData) -> f64 {
    let mut stress = 10.0;

    let vitals = &patient.vitals;
    if vitals.systolic_bp > 130.0 {
        stress += (vitals.systolic_bp - 130.0) * 0.5;
    }
    if vitals.diastolic_bp > 85.0 {
        stress += (vitals.diastolic_bp - 85.0) * 0.6;
    }
    if vitals.glucose > 110.0 {
        stress += (vitals.glucose - 110.0) * 0.15;
    }

    let serum = &patient.serum;
    if serum.hba1c > 5.7 {
        stress += (serum.hba1c - 5.7) * 6.0;
    }
    if serum.cholesterol > 200.0 {
        stress += (serum.cholesterol - 200.0) * 0.05;
    }

    if patient.has_condition(Condition::Diabetes) {
        stress += 10.0;
    }
    if patient.has_condition(Condition::Hypertension) {
        stress += 10.0;
    }

    let lifestyle = &patient.lifestyle;
    if lifestyle.salt_intake_g > 5.0 {
        stress += (lifestyle.salt_intake_g - 5.0) * 3.0;
    }
    if patient.markers.crp > 3.0 {
        stress += (patient.markers.crp - 3.0) * 2.0;
    }
    stress += match lifestyle.smoking {
        SmokingStatus::Current => 12.0,
        SmokingStatus::Former => 5.0,
        SmokingStatus::Never => 0.0,
    };
    if lifestyle.alcohol_units_week > 7.0 {
        stress += (lifestyle.alcohol_units_week - 7.0) * 1.5;
    }
    // Protein load above 1.2 g/kg/day stresses filtration.
    let protein_ceiling = patient.demographics.weight_kg * 1.2;
    if lifestyle.protein_intake_g > protein_ceiling {
        stress += (lifestyle.protein_intake_g - protein_ceiling) * 0.1;
    }

    round1(clamp_score(stress))
}

/// Risk of CKD progression.
///
/// Factors: GFR deficit, urine albumin on a log scale, proteinuria,
/// comorbidity flags, HbA1c, blood pressure.
pub fn ckd_progression_risk(patient: &PatientData, gfr: f64) -> f64 {
    let mut risk = 5.0;

    if gfr < 90.0 {
        risk += (90.0 - gfr) * 0.6;
    }
    let albumin = patient.urine.albumin_mg_day;
    if albumin > 30.0 {
        risk += (albumin / 30.0).log10() * 25.0;
    }
    if patient.urine.protein_mg_day > 150.0 {
        risk += 10.0;
    }
    if patient.has_condition(Condition::Diabetes) {
        risk += 15.0;
    }
    if patient.has_condition(Condition::Hypertension) {
        risk += 12.0;
    }
    if patient.serum.hba1c > 7.0 {
        risk += (patient.serum.hba1c - 7.0) * 5.0;
    }
    if patient.vitals.systolic_bp > 140.0 {
        risk += (patient.vitals.systolic_bp - 140.0) * 0.5;
    }

    round1(clamp_score(risk))
}

/// Cardiovascular risk.
///
/// Factors: blood pressure, cholesterol, triglycerides, GFR deficit,
/// heart-disease/diabetes flags, smoking, age.
pub fn cardiovascular_risk(patient: &PatientData, gfr: f64) -> f64 {
    let mut risk = 5.0;

    if patient.vitals.systolic_bp > 120.0 {
        risk += (patient.vitals.systolic_bp - 120.0) * 0.4;
    }
    let serum = &patient.serum;
    if serum.cholesterol > 200.0 {
        risk += (serum.cholesterol - 200.0) * 0.08;
    }
    if serum.triglycerides > 150.0 {
        risk += (serum.triglycerides - 150.0) * 0.04;
    }
    if gfr < 60.0 {
        risk += (60.0 - gfr) * 0.5;
    }
    if patient.has_condition(Condition::HeartDisease) {
        risk += 20.0;
    }
    if patient.has_condition(Condition::Diabetes) {
        risk += 12.0;
    }
    risk += match patient.lifestyle.smoking {
        SmokingStatus::Current => 15.0,
        SmokingStatus::Former => 6.0,
        SmokingStatus::Never => 0.0,
    };
    let age = patient.demographics.age as f64;
    if age > 50.0 {
        risk += (age - 50.0) * 0.4;
    }

    round1(clamp_score(risk))
}

/// Acute kidney injury risk.
///
/// Factors: GFR, age, comorbidities, hydration, creatinine, presence of an
/// NSAID among current medicines.
pub fn aki_risk(patient: &PatientData, gfr: f64) -> f64 {
    let mut risk = 5.0;

    if gfr < 60.0 {
        risk += (60.0 - gfr) * 0.8;
    }
    let age = patient.demographics.age as f64;
    if age > 65.0 {
        risk += (age - 65.0) * 0.7;
    }
    if patient.has_condition(Condition::Diabetes) {
        risk += 8.0;
    }
    if patient.has_condition(Condition::Hypertension) {
        risk += 6.0;
    }
    if patient.has_condition(Condition::HeartDisease) {
        risk += 8.0;
    }
    if patient.lifestyle.hydration_level < 4.0 {
        risk += (4.0 - patient.lifestyle.hydration_level) * 6.0;
    }
    if patient.serum.creatinine > 1.3 {
        risk += (patient.serum.creatinine - 1.3) * 15.0;
    }
    if takes_nsaid(patient) {
        risk += 15.0;
    }

    round1(clamp_score(risk))
}

/// Urinary-tract infection risk.
///
/// Factors: GFR, diabetes, UTI history, age, serum albumin.
pub fn infection_risk(patient: &PatientData, gfr: f64) -> f64 {
    let mut risk = 5.0;

    if gfr < 45.0 {
        risk += (45.0 - gfr) * 0.5;
    }
    if patient.has_condition(Condition::Diabetes) {
        risk += 12.0;
    }
    if patient.has_condition(Condition::UtiHistory) {
        risk += 18.0;
    }
    let age = patient.demographics.age as f64;
    if age > 70.0 {
        risk += (age - 70.0) * 0.8;
    }
    if patient.serum.albumin < 3.5 {
        risk += (3.5 - patient.serum.albumin) * 10.0;
    }

    round1(clamp_score(risk))
}

/// Electrolyte balance: 100 minus deviation penalties on potassium, sodium,
/// calcium, and phosphorus reference ranges.
pub fn electrolyte_balance(patient: &PatientData) -> f64 {
    let serum = &patient.serum;
    let mut score = 100.0;

    if serum.potassium < 3.5 {
        score -= (3.5 - serum.potassium) * 20.0;
    } else if serum.potassium > 5.0 {
        score -= (serum.potassium - 5.0) * 20.0;
    }
    if serum.sodium < 135.0 {
        score -= (135.0 - serum.sodium) * 2.5;
    } else if serum.sodium > 145.0 {
        score -= (serum.sodium - 145.0) * 2.5;
    }
    if serum.calcium < 8.5 {
        score -= (8.5 - serum.calcium) * 8.0;
    } else if serum.calcium > 10.2 {
        score -= (serum.calcium - 10.2) * 8.0;
    }
    if serum.phosphorus < 2.5 {
        score -= (2.5 - serum.phosphorus) * 10.0;
    } else if serum.phosphorus > 4.5 {
        score -= (serum.phosphorus - 4.5) * 10.0;
    }

    round1(clamp_score(score))
}

/// Mineral-bone health from PTH, vitamin D, phosphorus, and calcium.
pub fn mineral_bone_score(patient: &PatientData) -> f64 {
    let mut score = 100.0;

    if patient.markers.pth > 65.0 {
        score -= (patient.markers.pth - 65.0) * 0.3;
    }
    if patient.markers.vitamin_d < 30.0 {
        score -= (30.0 - patient.markers.vitamin_d) * 1.2;
    }
    if patient.serum.phosphorus > 4.5 {
        score -= (patient.serum.phosphorus - 4.5) * 8.0;
    }
    if patient.serum.calcium < 8.5 {
        score -= (8.5 - patient.serum.calcium) * 10.0;
    }

    round1(clamp_score(score))
}

/// Anemia health score from hemoglobin (gender-specific threshold) and GFR.
pub fn anemia_score(patient: &PatientData, gfr: f64) -> f64 {
    let mut score = 100.0;

    let threshold = match patient.demographics.gender {
        Gender::Male => 13.5,
        Gender::Female => 12.0,
    };
    if patient.serum.hemoglobin < threshold {
        score -= (threshold - patient.serum.hemoglobin) * 12.0;
    }
    if gfr < 60.0 {
        score -= (60.0 - gfr) * 0.3;
    }

    round1(clamp_score(score))
}

/// Inflammation health score from CRP, serum albumin, and smoking.
pub fn inflammation_score(patient: &PatientData) -> f64 {
    let mut score = 100.0;

    if patient.markers.crp > 3.0 {
        score -= (patient.markers.crp - 3.0) * 6.0;
    }
    if patient.serum.albumin < 3.8 {
        score -= (3.8 - patient.serum.albumin) * 15.0;
    }
    score -= match patient.lifestyle.smoking {
        SmokingStatus::Current => 8.0,
        SmokingStatus::Former => 3.0,
        SmokingStatus::Never => 0.0,
    };

    round1(clamp_score(score))
}

/// Renal perfusion index from blood-pressure deviation, heart disease,
/// and GFR.
pub fn perfusion_index(patient: &PatientData, gfr: f64) -> f64 {
    let mut score = 100.0;

    score -= (patient.vitals.systolic_bp - 120.0).abs() * 0.4;
    score -= (patient.vitals.diastolic_bp - 80.0).abs() * 0.3;
    if patient.has_condition(Condition::HeartDisease) {
        score -= 15.0;
    }
    if gfr < 60.0 {
        score -= (60.0 - gfr) * 0.4;
    }

    round1(clamp_score(score))
}

/// Vascular health from blood pressure, lipids, smoking, and diabetes.
pub fn vascular_health(patient: &PatientData) -> f64 {
    let mut score = 100.0;

    if patient.vitals.systolic_bp > 130.0 {
        score -= (patient.vitals.systolic_bp - 130.0) * 0.5;
    }
    let serum = &patient.serum;
    if serum.cholesterol > 200.0 {
        score -= (serum.cholesterol - 200.0) * 0.06;
    }
    if serum.triglycerides > 150.0 {
        score -= (serum.triglycerides - 150.0) * 0.03;
    }
    score -= match patient.lifestyle.smoking {
        SmokingStatus::Current => 12.0,
        SmokingStatus::Former => 5.0,
        SmokingStatus::Never => 0.0,
    };
    if patient.has_condition(Condition::Diabetes) {
        score -= 8.0;
    }

    round1(clamp_score(score))
}

/// Interstitial health from CRP, uric acid, proteinuria, and GFR.
pub fn interstitial_health(patient: &PatientData, gfr: f64) -> f64 {
    let mut score = 100.0;

    if patient.markers.crp > 3.0 {
        score -= (patient.markers.crp - 3.0) * 4.0;
    }
    if patient.serum.uric_acid > 7.0 {
        score -= (patient.serum.uric_acid - 7.0) * 5.0;
    }
    if patient.urine.protein_mg_day > 150.0 {
        score -= 10.0;
    }
    if gfr < 60.0 {
        score -= (60.0 - gfr) * 0.3;
    }

    round1(clamp_score(score))
}

// ── Tests ────────────────────────────────────────────────────────────────────
