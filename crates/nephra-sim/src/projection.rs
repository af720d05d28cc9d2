//! Time projection of an assessment snapshot.
//!
//! Pure exponential-approach model: with `months = days / 30`, the
//! improvement factor `1 − e^(−months/6)` approaches 1 asymptotically. The
//! maximum achievable GFR gain is proportional to the headroom above an
//! efficiency floor of 40. Each horizon is computed independently from the
//! same starting snapshot — projections are never chained.

use nephra_contracts::metrics::KidneyMetrics;
use nephra_metrics::composite::{cortex_for, efficiency_for, glomerular_for, nephron_health_for};
use nephra_metrics::gfr::{GFR_MAX, GFR_MIN};
use nephra_metrics::{clamp_score, round1};

/// Efficiency floor below which no projected GFR gain accrues.
const EFFICIENCY_FLOOR: f64 = 40.0;

/// GFR gain per efficiency point of headroom above the floor.
const GFR_GAIN_PER_POINT: f64 = 0.08;

/// Fractional improvement headroom per moving score at factor 1.
const STRESS_RATE: f64 = 0.15;
const STONE_RATE: f64 = 0.12;
const CKD_RATE: f64 = 0.10;
const CV_RATE: f64 = 0.12;
const OVERALL_RATE: f64 = 0.10;

/// Project a snapshot `days_ahead` days forward.
///
/// Moving fields: GFR, efficiency, stress, stone risk, CKD-progression
/// risk, cardiovascular risk, overall score, and the three heatmap regions
/// coupled to efficiency and stress (glomerular, nephron, cortex). All
/// other fields are carried through unchanged from the input snapshot.
/// `project(metrics, 0)` returns the snapshot unchanged.
pub fn project(metrics: &KidneyMetrics, days_ahead: u32) -> KidneyMetrics {
    let months = days_ahead as f64 / 30.0;
    let factor = 1.0 - (-months / 6.0).exp();

    let max_gfr_gain = ((metrics.efficiency - EFFICIENCY_FLOOR) * GFR_GAIN_PER_POINT).max(0.0);
    let gfr = round1((metrics.gfr + max_gfr_gain * factor).clamp(GFR_MIN, GFR_MAX));
    let efficiency = efficiency_for(gfr);

    let stress_index = round1(clamp_score(
        metrics.stress_index - metrics.stress_index * STRESS_RATE * factor,
    ));
    let stone_risk = round1(clamp_score(
        metrics.stone_risk - metrics.stone_risk * STONE_RATE * factor,
    ));
    let ckd_progression_risk = round1(clamp_score(
        metrics.ckd_progression_risk - metrics.ckd_progression_risk * CKD_RATE * factor,
    ));
    let cardiovascular_risk = round1(clamp_score(
        metrics.cardiovascular_risk - metrics.cardiovascular_risk * CV_RATE * factor,
    ));
    let overall_health_score = clamp_score(
        metrics.overall_health_score
            + (100.0 - metrics.overall_health_score) * OVERALL_RATE * factor,
    )
    .round();

    let nephron_region = nephron_health_for(efficiency, stress_index);
    let mut heatmap = metrics.heatmap.clone();
    heatmap.glomerular = glomerular_for(efficiency);
    heatmap.nephron = nephron_region;
    heatmap.cortex = cortex_for(nephron_region, metrics.perfusion_index);

    KidneyMetrics {
        gfr,
        efficiency,
        stress_index,
        stone_risk,
        ckd_progression_risk,
        cardiovascular_risk,
        overall_health_score,
        heatmap,
        ..metrics.clone()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::neutral_patient;
    use nephra_metrics::calculate_baseline;

    /// Zero days ahead means an improvement factor of zero: the snapshot
    /// comes back unchanged.
    #[test]
    fn zero_day_projection_is_identity() {
        let baseline = calculate_baseline(&neutral_patient());
        let projected = project(&baseline, 0);
        assert_eq!(projected, baseline);
    }

    /// At 180 days the factor is 1 − e^(−1) ≈ 0.632.
    #[test]
    fn six_month_factor_applies_to_gfr() {
        let baseline = calculate_baseline(&neutral_patient());
        let projected = project(&baseline, 180);

        let factor = 1.0 - (-1.0_f64).exp();
        let max_gain = (baseline.efficiency - 40.0) * 0.08;
        let expected = round1(baseline.gfr + max_gain * factor);
        assert_eq!(projected.gfr, expected);
    }

    /// Risk scores decay toward their improved values; carried fields do not move.
    #[test]
    fn risks_decay_and_carried_fields_hold() {
        let mut patient = neutral_patient();
        patient.vitals.systolic_bp = 150.0;
        patient.serum.uric_acid = 8.0;
        let baseline = calculate_baseline(&patient);

        let projected = project(&baseline, 365);

        assert!(projected.stress_index < baseline.stress_index);
        assert!(projected.stone_risk < baseline.stone_risk);
        assert!(projected.cardiovascular_risk < baseline.cardiovascular_risk);
        assert!(projected.overall_health_score >= baseline.overall_health_score);

        // Carried through unchanged.
        assert_eq!(projected.creatinine, baseline.creatinine);
        assert_eq!(projected.electrolyte_balance, baseline.electrolyte_balance);
        assert_eq!(projected.perfusion_index, baseline.perfusion_index);
        assert_eq!(projected.aki_risk, baseline.aki_risk);
        assert_eq!(projected.heatmap.medulla, baseline.heatmap.medulla);
        assert_eq!(projected.heatmap.vascular, baseline.heatmap.vascular);
    }

    /// Horizons are independent: projecting 90 days twice is not the same
    /// as projecting 180 days once, and both derive from the same start.
    #[test]
    fn horizons_are_not_chained() {
        let baseline = calculate_baseline(&neutral_patient());

        let at_180 = project(&baseline, 180);
        let chained = project(&project(&baseline, 90), 90);

        // The exponential model is not self-composing; a chained result
        // overshoots the direct one.
        assert!(chained.stress_index <= at_180.stress_index);
        assert_ne!(chained, at_180);
    }

    /// Below the efficiency floor there is no projected GFR gain.
    #[test]
    fn no_gfr_gain_below_efficiency_floor() {
        let mut patient = neutral_patient();
        patient.serum.creatinine = 3.5; // deep CKD, efficiency well under 40
        let baseline = calculate_baseline(&patient);
        assert!(baseline.efficiency < 40.0);

        let projected = project(&baseline, 365);
        assert_eq!(projected.gfr, baseline.gfr);
    }

    /// Longer horizons approach the asymptote monotonically.
    #[test]
    fn factor_is_monotone_in_horizon() {
        let mut patient = neutral_patient();
        patient.vitals.systolic_bp = 160.0;
        let baseline = calculate_baseline(&patient);

        let mut last_stress = baseline.stress_index;
        for days in [7, 30, 90, 180, 365] {
            let projected = project(&baseline, days);
            assert!(projected.stress_index <= last_stress);
            last_stress = projected.stress_index;
        }
    }
}
