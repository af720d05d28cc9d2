//! TOML-driven drug-class lexicon.
//!
//! `DrugLexicon` loads an ordered classification ruleset from a TOML
//! document and resolves free-text medicine names to drug classes.
//!
//! Classification algorithm:
//!
//! 1. **Exact phase** — every `drugs` entry across all rules is tested as a
//!    case-insensitive substring of the medicine name; the longest matching
//!    entry wins, so "calcium acetate" beats any shorter coincidental hit.
//! 2. **Heuristic phase** — rule `keywords` are tested in declaration order,
//!    at word boundaries only: "ace" matches "ACE 10mg" but never the "ace"
//!    inside "acetate".
//! 3. No match — the name classifies to no class. This is a deliberate open
//!    policy, not a failure: unclassified medicines still appear in
//!    treatment lists but contribute no dosed effect and no interaction
//!    checks.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use nephra_contracts::error::{NephraError, NephraResult};
use nephra_contracts::pharma::DrugClass;

/// The built-in lexicon document shipped with the engine.
const BUILTIN_LEXICON: &str = include_str!("../reference/lexicon.toml");

/// One classification rule loaded from TOML.
///
/// Rules are matched in the order they appear in the document. `drugs` are
/// member medicine names for the exact phase; `keywords` are class-name
/// mentions for the heuristic fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRule {
    /// The class this rule resolves to.
    pub class: DrugClass,
    /// Member drug names, matched case-insensitively as substrings.
    pub drugs: Vec<String>,
    /// Word-bounded class-name mentions for the heuristic phase.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The top-level structure deserialized from a lexicon TOML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Ordered list of rules. Heuristics fire first-match-wins.
    pub classes: Vec<ClassRule>,
}

/// The immutable drug-class lookup built once at process start.
#[derive(Debug)]
pub struct DrugLexicon {
    rules: Vec<ClassRule>,
}

impl DrugLexicon {
    /// Parse `s` as TOML and build a `DrugLexicon`.
    ///
    /// Returns `NephraError::ConfigError` if the TOML is malformed, does not
    /// match the `LexiconConfig` schema, or declares the same class twice.
    pub fn from_toml_str(s: &str) -> NephraResult<Self> {
        let config: LexiconConfig = toml::from_str(s).map_err(|e| NephraError::ConfigError {
            reason: format!("failed to parse lexicon TOML: {}", e),
        })?;

        let mut seen = std::collections::BTreeSet::new();
        for rule in &config.classes {
            if !seen.insert(rule.class) {
                return Err(NephraError::ConfigError {
                    reason: format!("lexicon declares class '{}' more than once", rule.class),
                });
            }
        }

        Ok(Self { rules: config.classes })
    }

    /// Read the file at `path` and parse it as a lexicon document.
    pub fn from_file(path: &Path) -> NephraResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| NephraError::ConfigError {
            reason: format!("failed to read lexicon file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the lexicon from the embedded reference document.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document is malformed — a build defect, not a
    /// runtime condition.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_LEXICON).expect("embedded lexicon document must parse")
    }

    /// Resolve a free-text medicine name to a drug class.
    ///
    /// Returns `None` for unrecognized names — callers treat that as "no
    /// dosed effect, no interaction checks", never as an error.
    pub fn classify(&self, medicine: &str) -> Option<DrugClass> {
        let lowered = medicine.to_lowercase();

        // Exact phase: longest member-name substring wins.
        let mut best: Option<(usize, DrugClass)> = None;
        for rule in &self.rules {
            for drug in &rule.drugs {
                if lowered.contains(drug.as_str()) {
                    let longer = match best {
                        Some((len, _)) => drug.len() > len,
                        None => true,
                    };
                    if longer {
                        best = Some((drug.len(), rule.class));
                    }
                }
            }
        }
        if let Some((_, class)) = best {
            debug!(medicine, %class, "classified by member name");
            return Some(class);
        }

        // Heuristic phase: word-bounded keyword mentions, first match wins.
        for rule in &self.rules {
            for keyword in &rule.keywords {
                if contains_word(&lowered, keyword) {
                    debug!(medicine, class = %rule.class, keyword = keyword.as_str(), "classified by keyword");
                    return Some(rule.class);
                }
            }
        }

        warn!(medicine, "medicine name did not classify to any drug class");
        None
    }

    /// The ordered ruleset, exposed for diagnostics and tests.
    pub fn rules(&self) -> &[ClassRule] {
        &self.rules
    }
}

/// True if `haystack` contains `needle` delimited by word boundaries.
///
/// A boundary is the string edge or any non-alphanumeric character, so
/// "ace" is found in "ace 10mg" and "ace-inhibitor" but not in "acetate".
fn contains_word(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(offset) = haystack[start..].find(needle) {
        let begin = start + offset;
        let end = begin + needle.len();

        let boundary_before = begin == 0
            || !haystack[..begin]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
        let boundary_after = end == haystack.len()
            || !haystack[end..].chars().next().is_some_and(|c| c.is_alphanumeric());

        if boundary_before && boundary_after {
            return true;
        }
        start = begin + 1;
    }
    false
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_member_names_case_insensitively() {
        let lexicon = DrugLexicon::builtin();

        assert_eq!(lexicon.classify("Lisinopril 10mg"), Some(DrugClass::AceInhibitor));
        assert_eq!(lexicon.classify("LOSARTAN"), Some(DrugClass::Arb));
        assert_eq!(lexicon.classify("atorvastatin 20 mg"), Some(DrugClass::Statin));
        assert_eq!(lexicon.classify("Allopurinol"), Some(DrugClass::XanthineOxidaseInhibitor));
    }

    #[test]
    fn longest_member_match_wins() {
        let lexicon = DrugLexicon::builtin();

        // "calcium acetate" must resolve as a phosphate binder, not trip any
        // shorter coincidental member hit.
        assert_eq!(
            lexicon.classify("Calcium Acetate 667mg"),
            Some(DrugClass::PhosphateBinder)
        );
    }

    #[test]
    fn keyword_matches_at_word_boundaries_only() {
        let lexicon = DrugLexicon::builtin();

        // Class-name mention fires...
        assert_eq!(lexicon.classify("generic ACE inhibitor"), Some(DrugClass::AceInhibitor));
        assert_eq!(lexicon.classify("ace 5mg"), Some(DrugClass::AceInhibitor));
        // ...but "ace" inside another word does not.
        assert_eq!(lexicon.classify("zinc acetate"), None);
    }

    #[test]
    fn metformin_resolves_to_sglt2_bucket() {
        // Metformin is binned with the SGLT2 inhibitors for effect purposes.
        let lexicon = DrugLexicon::builtin();
        assert_eq!(lexicon.classify("Metformin 500mg"), Some(DrugClass::Sglt2Inhibitor));
    }

    #[test]
    fn unknown_names_classify_to_none() {
        let lexicon = DrugLexicon::builtin();
        assert_eq!(lexicon.classify("vitamin gummy"), None);
        assert_eq!(lexicon.classify(""), None);
    }

    #[test]
    fn builtin_covers_all_declared_classes() {
        let lexicon = DrugLexicon::builtin();
        assert_eq!(lexicon.rules().len(), 15);
    }

    #[test]
    fn duplicate_class_rule_is_a_config_error() {
        let doc = r#"
            [[classes]]
            class = "statin"
            drugs = ["atorvastatin"]

            [[classes]]
            class = "statin"
            drugs = ["simvastatin"]
        "#;
        let err = DrugLexicon::from_toml_str(doc).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = DrugLexicon::from_toml_str("classes = 3").unwrap_err();
        assert!(err.to_string().contains("configuration error"));
    }

    // ── contains_word ────────────────────────────────────────────────────────

    #[test]
    fn word_boundary_scan_finds_later_occurrences() {
        // First "iron" is embedded in "environ"; the standalone mention
        // later in the string must still be found.
        assert!(contains_word("environ iron tablet", "iron"));
        assert!(!contains_word("environment", "iron"));
    }
}
