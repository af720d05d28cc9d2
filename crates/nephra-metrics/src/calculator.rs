//! The baseline metrics calculator.
//!
//! `calculate_baseline` is the single entry point: a total pure function
//! from a validated patient snapshot to a fresh `KidneyMetrics`. It never
//! fails for well-formed numeric input — validation happens at the intake
//! boundary, not here.

use tracing::debug;

use nephra_contracts::metrics::KidneyMetrics;
use nephra_contracts::patient::PatientData;

use crate::composite::{
    biological_age_for, efficiency_for, heatmap_for, nephron_health_for, overall_health_for,
    OverallInputs, RegionInputs,
};
use crate::gfr::{albuminuria_category, ckd_stage, estimate_gfr, gfr_category};
use crate::round1;
use crate::scores;

/// Derive the full baseline assessment from a patient snapshot.
///
/// Derivation order matters only in that the GFR feeds several downstream
/// scores; every output field is computed fresh and nothing is read from a
/// previous snapshot.
pub fn calculate_baseline(patient: &PatientData) -> KidneyMetrics {
    let gfr = estimate_gfr(
        patient.serum.creatinine,
        patient.demographics.age,
        patient.demographics.gender,
    );

    // Risk scores.
    let stone_risk = scores::stone_risk(patient);
    let stress_index = scores::stress_index(patient);
    let ckd_progression_risk = scores::ckd_progression_risk(patient, gfr);
    let cardiovascular_risk = scores::cardiovascular_risk(patient, gfr);
    let aki_risk = scores::aki_risk(patient, gfr);
    let infection_risk = scores::infection_risk(patient, gfr);

    // Health scores.
    let electrolyte_balance = scores::electrolyte_balance(patient);
    let mineral_bone_score = scores::mineral_bone_score(patient);
    let anemia_score = scores::anemia_score(patient, gfr);
    let inflammation_score = scores::inflammation_score(patient);
    let perfusion_index = scores::perfusion_index(patient, gfr);
    let vascular_health = scores::vascular_health(patient);
    let interstitial_health = scores::interstitial_health(patient, gfr);

    // Composites.
    let efficiency = efficiency_for(gfr);
    let kidney_biological_age = biological_age_for(patient.demographics.age, efficiency, stress_index);
    let nephron_health = nephron_health_for(efficiency, stress_index);

    let heatmap = heatmap_for(&RegionInputs {
        efficiency,
        nephron_health,
        perfusion_index,
        stone_risk,
        infection_risk,
        interstitial_health,
        vascular_health,
    });

    let overall_health_score = overall_health_for(&OverallInputs {
        efficiency,
        stress_index,
        stone_risk,
        ckd_progression_risk,
        electrolyte_balance,
        nephron_health,
        vascular_health,
        mineral_bone_score,
        anemia_score,
    });

    debug!(gfr, overall = overall_health_score, "baseline assessment derived");

    KidneyMetrics {
        gfr,
        gfr_category: gfr_category(gfr),
        ckd_stage: ckd_stage(gfr),
        albuminuria_category: albuminuria_category(patient.urine.albumin_mg_day),
        creatinine: patient.serum.creatinine,
        bun: patient.serum.bun,
        uric_acid: patient.serum.uric_acid,
        bun_creatinine_ratio: round1(patient.serum.bun / patient.serum.creatinine),
        efficiency,
        kidney_biological_age,
        stone_risk,
        stress_index,
        ckd_progression_risk,
        cardiovascular_risk,
        aki_risk,
        infection_risk,
        electrolyte_balance,
        mineral_bone_score,
        anemia_score,
        inflammation_score,
        perfusion_index,
        nephron_health,
        interstitial_health,
        vascular_health,
        overall_health_score,
        heatmap,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_metrics_in_range, neutral_patient};
    use nephra_contracts::metrics::{AlbuminuriaCategory, GfrCategory};
    use nephra_contracts::patient::Condition;

    /// The reference patient: a 50-year-old male at creatinine 1.0 lands in
    /// G1 / stage 1 with GFR ≈ 91.7.
    #[test]
    fn baseline_reference_patient() {
        let metrics = calculate_baseline(&neutral_patient());

        assert!((metrics.gfr - 91.7).abs() < 0.05);
        assert_eq!(metrics.gfr_category, GfrCategory::G1);
        assert_eq!(metrics.ckd_stage, 1);
        assert_eq!(metrics.albuminuria_category, AlbuminuriaCategory::A1);
        assert_eq!(metrics.bun_creatinine_ratio, 14.0);
    }

    /// Identical input must yield a bit-identical output.
    #[test]
    fn baseline_is_pure() {
        let patient = neutral_patient();
        let a = calculate_baseline(&patient);
        let b = calculate_baseline(&patient);
        assert_eq!(a, b);
    }

    /// Every 0–100 field stays in range across a spread of degraded inputs.
    #[test]
    fn baseline_ranges_hold_for_sick_patients() {
        let mut patient = neutral_patient();
        patient.demographics.age = 78;
        patient.serum.creatinine = 4.2;
        patient.serum.uric_acid = 11.0;
        patient.serum.hemoglobin = 8.0;
        patient.serum.hba1c = 11.5;
        patient.vitals.systolic_bp = 185.0;
        patient.vitals.diastolic_bp = 110.0;
        patient.urine.albumin_mg_day = 900.0;
        patient.urine.protein_mg_day = 1200.0;
        patient.markers.crp = 22.0;
        patient.lifestyle.hydration_level = 1.0;
        patient.conditions.insert(Condition::Diabetes);
        patient.conditions.insert(Condition::Hypertension);
        patient.conditions.insert(Condition::HeartDisease);

        let metrics = calculate_baseline(&patient);
        assert_metrics_in_range(&metrics);
        assert_eq!(metrics.albuminuria_category, AlbuminuriaCategory::A3);
        assert!(metrics.ckd_stage >= 3);
    }

    /// A healthy snapshot scores high overall; a degraded one scores lower.
    #[test]
    fn overall_orders_healthy_above_sick() {
        let healthy = calculate_baseline(&neutral_patient());

        let mut sick = neutral_patient();
        sick.serum.creatinine = 3.0;
        sick.vitals.systolic_bp = 170.0;
        sick.conditions.insert(Condition::Diabetes);
        let degraded = calculate_baseline(&sick);

        assert!(healthy.overall_health_score > degraded.overall_health_score);
        assert!(healthy.kidney_biological_age < degraded.kidney_biological_age);
    }

    /// The biological age of the neutral patient reflects its efficiency
    /// deficit and baseline stress only.
    #[test]
    fn biological_age_neutral_patient() {
        let metrics = calculate_baseline(&neutral_patient());
        // efficiency = 91.7/120·100 = 76.4; 50 + 23.6·0.4 + 10·0.1 = 60.44 → 60.
        assert_eq!(metrics.kidney_biological_age, 60.0);
    }
}
