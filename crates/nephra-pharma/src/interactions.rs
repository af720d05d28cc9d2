//! TOML-driven class-pair interaction table and detector.
//!
//! The table is symmetric: a pair is declared once in either order and the
//! detector normalizes both lookup directions to one key. Detection walks
//! every unordered pair of classified treatments — it is order-independent
//! and has no side effects.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use nephra_contracts::error::{NephraError, NephraResult};
use nephra_contracts::pharma::{DrugClass, DrugInteraction, InteractionSeverity};
use nephra_contracts::treatment::Treatment;

use crate::lexicon::DrugLexicon;

/// The built-in interaction table shipped with the engine.
const BUILTIN_INTERACTIONS: &str = include_str!("../reference/interactions.toml");

/// One interaction entry loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRule {
    /// The unordered class pair, as declared.
    pub classes: (DrugClass, DrugClass),
    pub severity: InteractionSeverity,
    /// Short name, e.g. "Dual RAAS blockade".
    pub description: String,
    /// Clinical effect text surfaced with each detection.
    pub effect: String,
}

/// The top-level structure deserialized from an interactions TOML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionConfig {
    pub interactions: Vec<InteractionRule>,
}

/// The immutable class-pair lookup built once at process start.
#[derive(Debug)]
pub struct InteractionTable {
    by_pair: BTreeMap<(DrugClass, DrugClass), InteractionRule>,
}

/// Normalize an unordered class pair to a single map key.
fn pair_key(a: DrugClass, b: DrugClass) -> (DrugClass, DrugClass) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl InteractionTable {
    /// Parse `s` as TOML and build an `InteractionTable`.
    ///
    /// Returns `NephraError::ConfigError` if the TOML is malformed or the
    /// same unordered pair is declared twice.
    pub fn from_toml_str(s: &str) -> NephraResult<Self> {
        let config: InteractionConfig = toml::from_str(s).map_err(|e| NephraError::ConfigError {
            reason: format!("failed to parse interaction TOML: {}", e),
        })?;

        let mut by_pair = BTreeMap::new();
        for rule in config.interactions {
            let key = pair_key(rule.classes.0, rule.classes.1);
            if by_pair.insert(key, rule).is_some() {
                return Err(NephraError::ConfigError {
                    reason: format!(
                        "interaction table declares the pair ({}, {}) more than once",
                        key.0, key.1
                    ),
                });
            }
        }

        Ok(Self { by_pair })
    }

    /// Read the file at `path` and parse it as an interaction table.
    pub fn from_file(path: &Path) -> NephraResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| NephraError::ConfigError {
            reason: format!("failed to read interaction file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the table from the embedded reference document.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document is malformed — a build defect, not a
    /// runtime condition.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_INTERACTIONS).expect("embedded interaction table must parse")
    }

    /// Look up the interaction entry for an unordered class pair.
    pub fn lookup(&self, a: DrugClass, b: DrugClass) -> Option<&InteractionRule> {
        self.by_pair.get(&pair_key(a, b))
    }

    /// Number of known class pairs.
    pub fn len(&self) -> usize {
        self.by_pair.len()
    }

    /// True if the table holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }

    /// Detect all known interactions within a treatment list.
    ///
    /// Every unordered pair of treatments whose medicine names both resolve
    /// to a class is checked against the table; one `DrugInteraction` is
    /// produced per matching pair, with the actual medicine names
    /// substituted in (in treatment-list order). Treatments that do not
    /// classify are skipped entirely.
    pub fn detect(&self, lexicon: &DrugLexicon, treatments: &[Treatment]) -> Vec<DrugInteraction> {
        let classes: Vec<Option<DrugClass>> = treatments
            .iter()
            .map(|t| lexicon.classify(&t.medicine))
            .collect();

        let mut found = Vec::new();
        for i in 0..treatments.len() {
            let Some(class_a) = classes[i] else { continue };
            for j in (i + 1)..treatments.len() {
                let Some(class_b) = classes[j] else { continue };
                if let Some(rule) = self.lookup(class_a, class_b) {
                    debug!(
                        medicine_a = treatments[i].medicine.as_str(),
                        medicine_b = treatments[j].medicine.as_str(),
                        severity = %rule.severity,
                        "interaction detected"
                    );
                    found.push(DrugInteraction {
                        classes: rule.classes,
                        severity: rule.severity,
                        description: rule.description.clone(),
                        effect: rule.effect.clone(),
                        medicine_a: treatments[i].medicine.clone(),
                        medicine_b: treatments[j].medicine.clone(),
                    });
                }
            }
        }
        found
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
