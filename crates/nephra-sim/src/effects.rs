//! Per-class therapeutic effect bundles.
//!
//! Each drug class maps to one `EffectBundle` row of accumulator deltas.
//! The simulator iterates rows generically — adding a class means adding a
//! row here (and a lexicon entry), never a new branch in simulation code.
//!
//! Sign conventions: `*_delta` fields add onto the primary value;
//! `*_reduction` fields subtract from a risk score; `*_improvement` fields
//! add onto a health score. A harmful class (NSAIDs) simply carries negative
//! reductions and deltas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use nephra_contracts::pharma::DrugClass;

/// The per-class delta bundle applied once per dose unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectBundle {
    /// mL/min added to GFR.
    pub gfr_delta: f64,
    /// mg/dL added to serum creatinine.
    pub creatinine_delta: f64,
    /// mg/dL added to serum uric acid.
    pub uric_acid_delta: f64,
    pub stress_reduction: f64,
    pub stone_risk_reduction: f64,
    pub ckd_progression_reduction: f64,
    pub cardiovascular_reduction: f64,
    pub inflammation_improvement: f64,
    pub anemia_improvement: f64,
    pub mineral_bone_improvement: f64,
}

impl EffectBundle {
    /// The zero bundle: contributes nothing to any accumulator.
    pub const ZERO: EffectBundle = EffectBundle {
        gfr_delta: 0.0,
        creatinine_delta: 0.0,
        uric_acid_delta: 0.0,
        stress_reduction: 0.0,
        stone_risk_reduction: 0.0,
        ckd_progression_reduction: 0.0,
        cardiovascular_reduction: 0.0,
        inflammation_improvement: 0.0,
        anemia_improvement: 0.0,
        mineral_bone_improvement: 0.0,
    };

    /// Return this bundle with every field multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> EffectBundle {
        EffectBundle {
            gfr_delta: self.gfr_delta * factor,
            creatinine_delta: self.creatinine_delta * factor,
            uric_acid_delta: self.uric_acid_delta * factor,
            stress_reduction: self.stress_reduction * factor,
            stone_risk_reduction: self.stone_risk_reduction * factor,
            ckd_progression_reduction: self.ckd_progression_reduction * factor,
            cardiovascular_reduction: self.cardiovascular_reduction * factor,
            inflammation_improvement: self.inflammation_improvement * factor,
            anemia_improvement: self.anemia_improvement * factor,
            mineral_bone_improvement: self.mineral_bone_improvement * factor,
        }
    }

    /// Add `other` onto this bundle field-by-field.
    pub fn accumulate(&mut self, other: &EffectBundle) {
        self.gfr_delta += other.gfr_delta;
        self.creatinine_delta += other.creatinine_delta;
        self.uric_acid_delta += other.uric_acid_delta;
        self.stress_reduction += other.stress_reduction;
        self.stone_risk_reduction += other.stone_risk_reduction;
        self.ckd_progression_reduction += other.ckd_progression_reduction;
        self.cardiovascular_reduction += other.cardiovascular_reduction;
        self.inflammation_improvement += other.inflammation_improvement;
        self.anemia_improvement += other.anemia_improvement;
        self.mineral_bone_improvement += other.mineral_bone_improvement;
    }
}

/// The immutable class → bundle lookup, one row per recognized class.
#[derive(Debug)]
pub struct EffectTable {
    by_class: BTreeMap<DrugClass, EffectBundle>,
}

impl EffectTable {
    /// Build the reference effect table.
    pub fn builtin() -> Self {
        use DrugClass::*;

        let rows: [(DrugClass, EffectBundle); 15] = [
            (AceInhibitor, EffectBundle {
                gfr_delta: 2.0,
                creatinine_delta: -0.04,
                stress_reduction: 5.0,
                ckd_progression_reduction: 8.0,
                cardiovascular_reduction: 6.0,
                inflammation_improvement: 1.0,
                ..EffectBundle::ZERO
            }),
            (Arb, EffectBundle {
                gfr_delta: 1.8,
                creatinine_delta: -0.03,
                stress_reduction: 5.0,
                ckd_progression_reduction: 7.0,
                cardiovascular_reduction: 5.0,
                inflammation_improvement: 1.0,
                ..EffectBundle::ZERO
            }),
            (CalciumChannelBlocker, EffectBundle {
                gfr_delta: 1.0,
                stress_reduction: 4.0,
                cardiovascular_reduction: 5.0,
                ..EffectBundle::ZERO
            }),
            (Diuretic, EffectBundle {
                gfr_delta: 0.5,
                stress_reduction: 3.0,
                cardiovascular_reduction: 4.0,
                ..EffectBundle::ZERO
            }),
            (BetaBlocker, EffectBundle {
                stress_reduction: 6.0,
                cardiovascular_reduction: 5.0,
                ..EffectBundle::ZERO
            }),
            (Statin, EffectBundle {
                cardiovascular_reduction: 8.0,
                inflammation_improvement: 3.0,
                ..EffectBundle::ZERO
            }),
            (XanthineOxidaseInhibitor, EffectBundle {
                gfr_delta: 1.0,
                uric_acid_delta: -1.5,
                stone_risk_reduction: 10.0,
                ..EffectBundle::ZERO
            }),
            (Sglt2Inhibitor, EffectBundle {
                gfr_delta: 3.0,
                stress_reduction: 2.0,
                ckd_progression_reduction: 10.0,
                cardiovascular_reduction: 7.0,
                ..EffectBundle::ZERO
            }),
            (Dpp4Inhibitor, EffectBundle {
                stress_reduction: 2.0,
                ckd_progression_reduction: 3.0,
                ..EffectBundle::ZERO
            }),
            (Glp1Agonist, EffectBundle {
                stress_reduction: 3.0,
                ckd_progression_reduction: 5.0,
                cardiovascular_reduction: 6.0,
                ..EffectBundle::ZERO
            }),
            // NSAIDs are net harmful to the kidney: negative deltas.
            (Nsaid, EffectBundle {
                gfr_delta: -3.0,
                creatinine_delta: 0.1,
                stress_reduction: -2.0,
                ..EffectBundle::ZERO
            }),
            (Anticoagulant, EffectBundle {
                cardiovascular_reduction: 4.0,
                ..EffectBundle::ZERO
            }),
            (PhosphateBinder, EffectBundle {
                stone_risk_reduction: 2.0,
                mineral_bone_improvement: 8.0,
                ..EffectBundle::ZERO
            }),
            (Esa, EffectBundle {
                anemia_improvement: 12.0,
                ..EffectBundle::ZERO
            }),
            (Iron, EffectBundle {
                anemia_improvement: 8.0,
                ..EffectBundle::ZERO
            }),
        ];

        Self {
            by_class: rows.into_iter().collect(),
        }
    }

    /// Look up the bundle for a class. Every `DrugClass` variant has a row.
    pub fn for_class(&self, class: DrugClass) -> EffectBundle {
        self.by_class.get(&class).copied().unwrap_or(EffectBundle::ZERO)
    }
}

/// Fallback bundle for medicine names containing "sodium bicarbonate",
/// which the lexicon does not carry as a class.
pub fn sodium_bicarbonate_bundle() -> EffectBundle {
    EffectBundle {
        gfr_delta: 1.5,
        ckd_progression_reduction: 6.0,
        ..EffectBundle::ZERO
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_has_a_row() {
        use DrugClass::*;
        let table = EffectTable::builtin();
        for class in [
            AceInhibitor, Arb, CalciumChannelBlocker, Diuretic, BetaBlocker,
            Statin, XanthineOxidaseInhibitor, Sglt2Inhibitor, Dpp4Inhibitor,
            Glp1Agonist, Nsaid, Anticoagulant, PhosphateBinder, Esa, Iron,
        ] {
            assert_ne!(table.for_class(class), EffectBundle::ZERO, "{} row is zero", class);
        }
    }

    #[test]
    fn scaling_multiplies_every_field() {
        let table = EffectTable::builtin();
        let ace = table.for_class(DrugClass::AceInhibitor);
        let tripled = ace.scaled(3.0);

        assert_eq!(tripled.gfr_delta, ace.gfr_delta * 3.0);
        assert_eq!(tripled.ckd_progression_reduction, ace.ckd_progression_reduction * 3.0);
        assert_eq!(tripled.creatinine_delta, ace.creatinine_delta * 3.0);
    }

    #[test]
    fn accumulate_sums_field_by_field() {
        let table = EffectTable::builtin();
        let mut acc = EffectBundle::ZERO;
        acc.accumulate(&table.for_class(DrugClass::Esa));
        acc.accumulate(&table.for_class(DrugClass::Iron));

        assert_eq!(acc.anemia_improvement, 20.0);
        assert_eq!(acc.gfr_delta, 0.0);
    }

    #[test]
    fn nsaid_row_is_net_harmful() {
        let nsaid = EffectTable::builtin().for_class(DrugClass::Nsaid);
        assert!(nsaid.gfr_delta < 0.0);
        assert!(nsaid.creatinine_delta > 0.0);
        assert!(nsaid.stress_reduction < 0.0);
    }
}
