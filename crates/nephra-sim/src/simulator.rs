//! The treatment simulator.
//!
//! `TreatmentSimulator` owns the trusted, immutable lookup structures —
//! drug lexicon, interaction table, effect table — and derives a simulated
//! `KidneyMetrics` from a baseline. The pipeline per call:
//!
//!   1. Accumulate per-class effect bundles for every classified treatment,
//!      scaled by dose (saturating at three tablets/day)
//!   2. Fall back to the sodium-bicarbonate / metformin substring checks for
//!      names the lexicon does not resolve
//!   3. Accumulate lifestyle deltas from the difference between requested
//!      adjustments and the patient's intake lifestyle
//!   4. Subtract interaction penalties
//!   5. Apply the accumulators to the baseline primaries, clamped
//!   6. Recompute every derived field from the new primaries with the same
//!      formulas the baseline calculator uses
//!
//! Step 6 is load-bearing: copying a derived field across snapshots would
//! silently desynchronize it from its inputs.

use tracing::{debug, warn};

use nephra_contracts::metrics::KidneyMetrics;
use nephra_contracts::patient::PatientData;
use nephra_contracts::pharma::{DrugClass, DrugInteraction, InteractionSeverity};
use nephra_contracts::treatment::{LifestyleAdjustments, Treatment};
use nephra_metrics::composite::{
    biological_age_for, efficiency_for, heatmap_for, nephron_health_for, overall_health_for,
    OverallInputs, RegionInputs,
};
use nephra_metrics::gfr::{albuminuria_category, ckd_stage, gfr_category, GFR_MAX, GFR_MIN};
use nephra_metrics::{clamp_score, round1};
use nephra_pharma::{DrugLexicon, InteractionTable};

use crate::effects::{sodium_bicarbonate_bundle, EffectBundle, EffectTable};

/// Dose units beyond which additional tablets add no therapeutic benefit.
const DOSE_SATURATION: u32 = 3;

/// The simulator with its injected reference structures.
///
/// Stateless between calls: `simulate` reads only its arguments and the
/// immutable tables, so one instance is safe to share across threads and
/// simulation runs.
pub struct TreatmentSimulator {
    lexicon: DrugLexicon,
    interactions: InteractionTable,
    effects: EffectTable,
}

impl TreatmentSimulator {
    /// Create a simulator from explicit reference structures.
    pub fn new(lexicon: DrugLexicon, interactions: InteractionTable, effects: EffectTable) -> Self {
        Self { lexicon, interactions, effects }
    }

    /// Create a simulator over the embedded reference datasets.
    pub fn builtin() -> Self {
        Self::new(
            DrugLexicon::builtin(),
            InteractionTable::builtin(),
            EffectTable::builtin(),
        )
    }

    /// The drug lexicon in use.
    pub fn lexicon(&self) -> &DrugLexicon {
        &self.lexicon
    }

    /// Detect interactions within a treatment list using the simulator's
    /// own lexicon and table.
    pub fn detect_interactions(&self, treatments: &[Treatment]) -> Vec<DrugInteraction> {
        self.interactions.detect(&self.lexicon, treatments)
    }

    /// Simulate the effect of `treatments` and `adjustments` on `baseline`.
    ///
    /// Pure: identical inputs yield a bit-identical snapshot. With no
    /// treatments and adjustments equal to the patient's own lifestyle
    /// values, the result equals `baseline`.
    pub fn simulate(
        &self,
        baseline: &KidneyMetrics,
        patient: &PatientData,
        treatments: &[Treatment],
        adjustments: &LifestyleAdjustments,
    ) -> KidneyMetrics {
        let mut acc = EffectBundle::ZERO;

        // ── Step 1 & 2: drug effects ─────────────────────────────────────────
        for treatment in treatments {
            let dose = treatment.tablets_per_day.min(DOSE_SATURATION) as f64;
            let bundle = match self.lexicon.classify(&treatment.medicine) {
                Some(class) => self.effects.for_class(class),
                None => {
                    let lowered = treatment.medicine.to_lowercase();
                    if lowered.contains("sodium bicarbonate") {
                        sodium_bicarbonate_bundle()
                    } else if lowered.contains("metformin") {
                        // Metformin is binned with the SGLT2 inhibitors for
                        // effect purposes.
                        self.effects.for_class(DrugClass::Sglt2Inhibitor)
                    } else {
                        warn!(
                            medicine = treatment.medicine.as_str(),
                            "unclassified medicine contributes no dosed effect"
                        );
                        continue;
                    }
                }
            };
            acc.accumulate(&bundle.scaled(dose));
        }

        // ── Step 3: lifestyle deltas ─────────────────────────────────────────
        self.accumulate_lifestyle(&mut acc, patient, adjustments);

        // ── Step 4: interaction penalties ────────────────────────────────────
        let interactions = self.detect_interactions(treatments);
        for interaction in &interactions {
            match interaction.severity {
                InteractionSeverity::Severe => {
                    acc.gfr_delta -= 3.0;
                    acc.stress_reduction -= 5.0;
                }
                InteractionSeverity::Moderate => {
                    acc.gfr_delta -= 1.0;
                    acc.stress_reduction -= 2.0;
                }
                InteractionSeverity::Mild => {}
            }
        }

        debug!(
            treatments = treatments.len(),
            interactions = interactions.len(),
            gfr_delta = acc.gfr_delta,
            "effect accumulation complete"
        );

        // ── Step 5: apply accumulators to the baseline primaries ─────────────
        let gfr = round1((baseline.gfr + acc.gfr_delta).clamp(GFR_MIN, GFR_MAX));
        let creatinine = (baseline.creatinine + acc.creatinine_delta).max(0.05);
        let uric_acid = (baseline.uric_acid + acc.uric_acid_delta).max(0.0);

        let stress_index = round1(clamp_score(baseline.stress_index - acc.stress_reduction));
        let stone_risk = round1(clamp_score(baseline.stone_risk - acc.stone_risk_reduction));
        let ckd_progression_risk = round1(clamp_score(
            baseline.ckd_progression_risk - acc.ckd_progression_reduction,
        ));
        let cardiovascular_risk = round1(clamp_score(
            baseline.cardiovascular_risk - acc.cardiovascular_reduction,
        ));
        let inflammation_score = round1(clamp_score(
            baseline.inflammation_score + acc.inflammation_improvement,
        ));
        let anemia_score = round1(clamp_score(baseline.anemia_score + acc.anemia_improvement));
        let mineral_bone_score = round1(clamp_score(
            baseline.mineral_bone_score + acc.mineral_bone_improvement,
        ));

        // ── Step 6: recompute derived fields from the new primaries ──────────
        let efficiency = efficiency_for(gfr);
        let nephron_health = nephron_health_for(efficiency, stress_index);
        let kidney_biological_age =
            biological_age_for(patient.demographics.age, efficiency, stress_index);

        let heatmap = heatmap_for(&RegionInputs {
            efficiency,
            nephron_health,
            perfusion_index: baseline.perfusion_index,
            stone_risk,
            infection_risk: baseline.infection_risk,
            interstitial_health: baseline.interstitial_health,
            vascular_health: baseline.vascular_health,
        });

        let overall_health_score = overall_health_for(&OverallInputs {
            efficiency,
            stress_index,
            stone_risk,
            ckd_progression_risk,
            electrolyte_balance: baseline.electrolyte_balance,
            nephron_health,
            vascular_health: baseline.vascular_health,
            mineral_bone_score,
            anemia_score,
        });

        KidneyMetrics {
            gfr,
            gfr_category: gfr_category(gfr),
            ckd_stage: ckd_stage(gfr),
            albuminuria_category: albuminuria_category(patient.urine.albumin_mg_day),
            creatinine,
            bun: baseline.bun,
            uric_acid,
            bun_creatinine_ratio: round1(baseline.bun / creatinine),
            efficiency,
            kidney_biological_age,
            stone_risk,
            stress_index,
            ckd_progression_risk,
            cardiovascular_risk,
            aki_risk: baseline.aki_risk,
            infection_risk: baseline.infection_risk,
            electrolyte_balance: baseline.electrolyte_balance,
            mineral_bone_score,
            anemia_score,
            inflammation_score,
            perfusion_index: baseline.perfusion_index,
            nephron_health,
            interstitial_health: baseline.interstitial_health,
            vascular_health: baseline.vascular_health,
            overall_health_score,
            heatmap,
        }
    }

    /// Accumulate deltas from the difference between requested lifestyle
    /// values and the patient's intake values. Only the beneficial
    /// directions carry weights — a request equal to the intake value is a
    /// strict no-op.
    fn accumulate_lifestyle(
        &self,
        acc: &mut EffectBundle,
        patient: &PatientData,
        adjustments: &LifestyleAdjustments,
    ) {
        let lifestyle = &patient.lifestyle;

        let hydration_gain = adjustments.hydration_level - lifestyle.hydration_level;
        if hydration_gain > 0.0 {
            acc.stone_risk_reduction += hydration_gain * 4.0;
            acc.gfr_delta += hydration_gain * 0.3;
        }

        let water_gain = adjustments.water_intake_l - lifestyle.water_intake_l;
        if water_gain > 0.0 {
            acc.stone_risk_reduction += water_gain * 5.0;
            acc.gfr_delta += water_gain * 0.2;
        }

        let salt_cut = lifestyle.salt_intake_g - adjustments.salt_intake_g;
        if salt_cut > 0.0 {
            acc.stress_reduction += salt_cut * 2.5;
            acc.cardiovascular_reduction += salt_cut * 2.0;
            acc.gfr_delta += salt_cut * 0.2;
        }

        let protein_cut = lifestyle.protein_intake_g - adjustments.protein_intake_g;
        if protein_cut > 0.0 {
            acc.stress_reduction += protein_cut * 0.1;
            acc.ckd_progression_reduction += protein_cut * 0.15;
            acc.creatinine_delta -= protein_cut * 0.002;
        }

        let exercise_gain = adjustments.exercise_level - lifestyle.exercise_level;
        if exercise_gain > 0.0 {
            acc.stress_reduction += exercise_gain * 2.0;
            acc.cardiovascular_reduction += exercise_gain * 1.5;
            acc.inflammation_improvement += exercise_gain * 1.0;
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
