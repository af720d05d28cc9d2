//! Drug classes and interaction records.
//!
//! `DrugClass` is the closed set of classes the lexicon can resolve to.
//! `DrugInteraction` entries are static reference data instantiated per
//! detection with the actual medicine names substituted in.

use serde::{Deserialize, Serialize};

/// Recognized drug classes.
///
/// Adding a class means adding a lexicon entry and an effect-table row —
/// never a new branch in engine code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrugClass {
    AceInhibitor,
    Arb,
    CalciumChannelBlocker,
    Diuretic,
    BetaBlocker,
    Statin,
    XanthineOxidaseInhibitor,
    Sglt2Inhibitor,
    Dpp4Inhibitor,
    Glp1Agonist,
    Nsaid,
    Anticoagulant,
    PhosphateBinder,
    Esa,
    Iron,
}

impl std::fmt::Display for DrugClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::AceInhibitor => "ACE inhibitor",
            Self::Arb => "ARB",
            Self::CalciumChannelBlocker => "calcium channel blocker",
            Self::Diuretic => "diuretic",
            Self::BetaBlocker => "beta blocker",
            Self::Statin => "statin",
            Self::XanthineOxidaseInhibitor => "xanthine oxidase inhibitor",
            Self::Sglt2Inhibitor => "SGLT2 inhibitor",
            Self::Dpp4Inhibitor => "DPP-4 inhibitor",
            Self::Glp1Agonist => "GLP-1 agonist",
            Self::Nsaid => "NSAID",
            Self::Anticoagulant => "anticoagulant",
            Self::PhosphateBinder => "phosphate binder",
            Self::Esa => "erythropoiesis-stimulating agent",
            Self::Iron => "iron supplement",
        };
        write!(f, "{}", label)
    }
}

/// Severity grading for a known class-pair interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionSeverity {
    Mild,
    Moderate,
    Severe,
}

impl std::fmt::Display for InteractionSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        };
        write!(f, "{}", label)
    }
}

/// A detected interaction between two treatments in a regimen.
///
/// `classes` is the unordered reference pair; `medicine_a`/`medicine_b` are
/// the actual names from the treatments that triggered the match, in
/// treatment-list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugInteraction {
    pub classes: (DrugClass, DrugClass),
    pub severity: InteractionSeverity,
    /// Short name of the interaction, e.g. "Dual RAAS blockade".
    pub description: String,
    /// Clinical effect text shown to the user.
    pub effect: String,
    pub medicine_a: String,
    pub medicine_b: String,
}
