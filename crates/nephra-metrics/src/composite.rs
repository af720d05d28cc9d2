//! Composite scores and the anatomical risk heatmap.
//!
//! Every function here is a fixed combination of already-derived values.
//! They are `pub` because the treatment simulator must recompute each
//! derived field from new primary values with these exact formulas —
//! copying a derived field across snapshots would silently desynchronize it
//! from its inputs.

use nephra_contracts::metrics::RiskHeatmapData;

use crate::{clamp_score, round1};

/// Filtration efficiency: GFR as a share of a 120 mL/min reference capacity,
/// expressed 0–100 and floored at 5.
pub fn efficiency_for(gfr: f64) -> f64 {
    round1((gfr / 120.0 * 100.0).clamp(5.0, 100.0))
}

/// Effective "kidney age": chronological age pushed up by lost efficiency
/// and by systemic stress. Rounded to a whole year.
pub fn biological_age_for(age: u32, efficiency: f64, stress: f64) -> f64 {
    (age as f64 + (100.0 - efficiency) * 0.4 + stress * 0.1).round()
}

/// Nephron health: a 70/30 blend of efficiency and inverted stress.
pub fn nephron_health_for(efficiency: f64, stress: f64) -> f64 {
    round1(clamp_score(0.7 * efficiency + 0.3 * (100.0 - stress)))
}

/// Inputs to the heatmap and the overall score that are not derived inside
/// this module. Bundled so the calculator and the simulator pass the same
/// field set.
#[derive(Debug, Clone, Copy)]
pub struct RegionInputs {
    pub efficiency: f64,
    pub nephron_health: f64,
    pub perfusion_index: f64,
    pub stone_risk: f64,
    pub infection_risk: f64,
    pub interstitial_health: f64,
    pub vascular_health: f64,
}

/// Glomerular region score: efficiency loss amplified by 1.2.
pub fn glomerular_for(efficiency: f64) -> f64 {
    round1(clamp_score(100.0 - (100.0 - efficiency) * 1.2))
}

/// Cortex region score: blend of nephron health and perfusion.
pub fn cortex_for(nephron_health: f64, perfusion: f64) -> f64 {
    round1(clamp_score(0.6 * nephron_health + 0.4 * perfusion))
}

/// Build the seven-region heatmap from its inputs.
///
/// Region formulas are fixed linear combinations:
/// - glomerular: efficiency loss × 1.2
/// - nephron: nephron health verbatim
/// - cortex: 0.6 nephron + 0.4 perfusion
/// - medulla: 0.5 inverted stone risk + 0.5 perfusion
/// - interstitial: interstitial health verbatim
/// - collecting system: 0.6 inverted stone risk + 0.4 inverted infection risk
/// - vascular: vascular health verbatim
pub fn heatmap_for(inputs: &RegionInputs) -> RiskHeatmapData {
    RiskHeatmapData {
        glomerular: glomerular_for(inputs.efficiency),
        nephron: inputs.nephron_health,
        cortex: cortex_for(inputs.nephron_health, inputs.perfusion_index),
        medulla: round1(clamp_score(
            0.5 * (100.0 - inputs.stone_risk) + 0.5 * inputs.perfusion_index,
        )),
        interstitial: inputs.interstitial_health,
        collecting_system: round1(clamp_score(
            0.6 * (100.0 - inputs.stone_risk) + 0.4 * (100.0 - inputs.infection_risk),
        )),
        vascular: inputs.vascular_health,
    }
}

/// Inputs to the overall weighted sum.
#[derive(Debug, Clone, Copy)]
pub struct OverallInputs {
    pub efficiency: f64,
    pub stress_index: f64,
    pub stone_risk: f64,
    pub ckd_progression_risk: f64,
    pub electrolyte_balance: f64,
    pub nephron_health: f64,
    pub vascular_health: f64,
    pub mineral_bone_score: f64,
    pub anemia_score: f64,
}

/// Overall health score: the fixed weighted sum, rounded to a whole number.
///
/// Weights: efficiency 0.25, inverted stress 0.15, inverted stone risk 0.05,
/// inverted CKD-progression risk 0.15, electrolyte balance 0.10, nephron
/// health 0.10, vascular health 0.10, mineral-bone 0.05, anemia 0.05.
pub fn overall_health_for(inputs: &OverallInputs) -> f64 {
    let weighted = 0.25 * inputs.efficiency
        + 0.15 * (100.0 - inputs.stress_index)
        + 0.05 * (100.0 - inputs.stone_risk)
        + 0.15 * (100.0 - inputs.ckd_progression_risk)
        + 0.10 * inputs.electrolyte_balance
        + 0.10 * inputs.nephron_health
        + 0.10 * inputs.vascular_health
        + 0.05 * inputs.mineral_bone_score
        + 0.05 * inputs.anemia_score;

    clamp_score(weighted).round()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efficiency_is_share_of_reference_capacity() {
        assert_eq!(efficiency_for(120.0), 100.0);
        assert_eq!(efficiency_for(60.0), 50.0);
        assert_eq!(efficiency_for(90.0), 75.0);
    }

    #[test]
    fn efficiency_floor_and_ceiling() {
        assert_eq!(efficiency_for(3.0), 5.0);
        assert_eq!(efficiency_for(160.0), 100.0);
    }

    #[test]
    fn biological_age_at_full_health_equals_age() {
        // Efficiency 100 and stress 0 add nothing.
        assert_eq!(biological_age_for(40, 100.0, 0.0), 40.0);
    }

    #[test]
    fn biological_age_accumulates_deficits() {
        // 50 + (100-75)·0.4 + 20·0.1 = 62.
        assert_eq!(biological_age_for(50, 75.0, 20.0), 62.0);
    }

    #[test]
    fn nephron_health_blend() {
        assert_eq!(nephron_health_for(100.0, 0.0), 100.0);
        // 0.7·50 + 0.3·(100-40) = 53.
        assert_eq!(nephron_health_for(50.0, 40.0), 53.0);
    }

    #[test]
    fn glomerular_amplifies_efficiency_loss() {
        assert_eq!(glomerular_for(100.0), 100.0);
        // 100 - 50·1.2 = 40.
        assert_eq!(glomerular_for(50.0), 40.0);
        // Deep loss clamps at zero rather than going negative.
        assert_eq!(glomerular_for(10.0), 0.0);
    }

    #[test]
    fn overall_perfect_inputs_score_one_hundred() {
        let inputs = OverallInputs {
            efficiency: 100.0,
            stress_index: 0.0,
            stone_risk: 0.0,
            ckd_progression_risk: 0.0,
            electrolyte_balance: 100.0,
            nephron_health: 100.0,
            vascular_health: 100.0,
            mineral_bone_score: 100.0,
            anemia_score: 100.0,
        };
        assert_eq!(overall_health_for(&inputs), 100.0);
    }

    #[test]
    fn overall_weights_apply_per_component() {
        // Only efficiency degraded: 100 - 0.25·40 = 90.
        let inputs = OverallInputs {
            efficiency: 60.0,
            stress_index: 0.0,
            stone_risk: 0.0,
            ckd_progression_risk: 0.0,
            electrolyte_balance: 100.0,
            nephron_health: 100.0,
            vascular_health: 100.0,
            mineral_bone_score: 100.0,
            anemia_score: 100.0,
        };
        assert_eq!(overall_health_for(&inputs), 90.0);
    }

    #[test]
    fn heatmap_regions_stay_in_range() {
        let inputs = RegionInputs {
            efficiency: 12.0,
            nephron_health: 15.0,
            perfusion_index: 20.0,
            stone_risk: 95.0,
            infection_risk: 90.0,
            interstitial_health: 10.0,
            vascular_health: 8.0,
        };
        let map = heatmap_for(&inputs);
        for region in [
            map.glomerular,
            map.nephron,
            map.cortex,
            map.medulla,
            map.interstitial,
            map.collecting_system,
            map.vascular,
        ] {
            assert!((0.0..=100.0).contains(&region), "region {} out of range", region);
        }
    }
}
