//! Two-phase intake validation.
//!
//! Phase 1 is structural: the raw JSON document is validated against the
//! embedded intake JSON Schema. Phase 2 is semantic: the typed document is
//! checked against range rules the schema cannot express (finite, positive
//! where physiology demands it, bounded scales). All failures are
//! accumulated before returning so form surfaces can show the full set in
//! one pass rather than one error at a time.
//!
//! The engine performs no validation of its own — a `PatientData` that
//! passed this boundary is the engine's totality precondition.

use serde::Serialize;
use tracing::{debug, warn};

use nephra_contracts::error::{NephraError, NephraResult};
use nephra_contracts::patient::PatientData;

use crate::document::IntakeDocument;

/// The embedded intake schema document.
const INTAKE_SCHEMA: &str = include_str!("../schema/intake.schema.json");

/// A single rule failure within an `IntakeReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeFailure {
    /// Dotted field path, e.g. "serum.creatinine", or "$" for
    /// document-level failures.
    pub field: String,
    pub message: String,
}

/// The result of validating one intake document.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeReport {
    /// True only if both phases passed.
    pub passed: bool,
    /// All failures collected across both phases. Empty on pass.
    pub failures: Vec<IntakeFailure>,
}

/// The intake boundary validator. Compiles the embedded schema once;
/// construct at process start and reuse.
pub struct IntakeValidator {
    schema: jsonschema::Validator,
}

impl IntakeValidator {
    /// Build the validator over the embedded intake schema.
    ///
    /// # Panics
    ///
    /// Panics if the embedded schema document is malformed — a build
    /// defect, not a runtime condition.
    pub fn new() -> Self {
        let schema_doc: serde_json::Value =
            serde_json::from_str(INTAKE_SCHEMA).expect("embedded intake schema must be valid JSON");
        let schema = jsonschema::validator_for(&schema_doc)
            .expect("embedded intake schema must compile");
        Self { schema }
    }

    /// Validate a raw intake JSON document.
    ///
    /// Returns `Err(SchemaValidation)` only when the input is not JSON at
    /// all; every other problem is reported through the `IntakeReport` so
    /// callers can render the full failure set.
    pub fn validate(&self, json: &str) -> NephraResult<IntakeReport> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| NephraError::SchemaValidation {
                reason: format!("intake document is not valid JSON: {}", e),
            })?;

        let mut failures: Vec<IntakeFailure> = Vec::new();

        // ── Phase 1: structural JSON Schema validation ────────────────────────
        for error in self.schema.iter_errors(&value) {
            let field = error.instance_path.to_string();
            let message = error.to_string();
            warn!(field = field.as_str(), %message, "structural intake failure");
            failures.push(IntakeFailure {
                field: if field.is_empty() { "$".to_string() } else { field },
                message,
            });
        }
        if !failures.is_empty() {
            // The document does not have the expected shape; semantic rules
            // would only produce noise on top.
            return Ok(IntakeReport { passed: false, failures });
        }

        // ── Phase 2: semantic range rules ────────────────────────────────────
        let document: IntakeDocument = match serde_json::from_value(value) {
            Ok(document) => document,
            Err(e) => {
                failures.push(IntakeFailure {
                    field: "$".to_string(),
                    message: format!("intake document did not deserialize: {}", e),
                });
                return Ok(IntakeReport { passed: false, failures });
            }
        };
        let patient = document.into_patient();
        failures.extend(semantic_failures(&patient));

        let passed = failures.is_empty();
        debug!(passed, failure_count = failures.len(), "intake validation complete");
        Ok(IntakeReport { passed, failures })
    }

    /// Validate and freeze an intake document into a `PatientData`.
    ///
    /// Structural failures map to `SchemaValidation`; semantic failures map
    /// to `InvalidInput` naming the first offending field, with every
    /// failure joined into the reason.
    pub fn parse_patient(&self, json: &str) -> NephraResult<PatientData> {
        let report = self.validate(json)?;
        if !report.passed {
            let joined = report
                .failures
                .iter()
                .map(|f| format!("{}: {}", f.field, f.message))
                .collect::<Vec<_>>()
                .join("; ");
            // Structural failures carry JSON-pointer paths ("/serum") or "$";
            // semantic failures carry dotted field names.
            let semantic_only = !report
                .failures
                .iter()
                .any(|f| f.field == "$" || f.field.starts_with('/'));
            if semantic_only {
                return Err(NephraError::InvalidInput {
                    field: report.failures[0].field.clone(),
                    reason: joined,
                });
            }
            return Err(NephraError::SchemaValidation { reason: joined });
        }

        // Both phases passed; the document deserializes cleanly.
        let document: IntakeDocument =
            serde_json::from_str(json).map_err(|e| NephraError::SchemaValidation {
                reason: format!("intake document did not deserialize: {}", e),
            })?;
        Ok(document.into_patient())
    }
}

impl Default for IntakeValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate every semantic range rule against the typed snapshot.
fn semantic_failures(patient: &PatientData) -> Vec<IntakeFailure> {
    let mut failures = Vec::new();

    let fail = |failures: &mut Vec<IntakeFailure>, field: &str, message: String| {
        failures.push(IntakeFailure {
            field: field.to_string(),
            message,
        });
    };

    // Age and body measurements.
    let demographics = &patient.demographics;
    if demographics.age == 0 || demographics.age > 120 {
        fail(&mut failures, "demographics.age", format!("age {} outside 1–120", demographics.age));
    }
    for (field, value) in [
        ("demographics.weight_kg", demographics.weight_kg),
        ("demographics.height_cm", demographics.height_cm),
    ] {
        if !value.is_finite() || value <= 0.0 {
            fail(&mut failures, field, format!("{} must be a positive finite number", value));
        }
    }

    // Creatinine is the one strictly-positive serum value: GFR and the
    // BUN/creatinine ratio divide by it.
    if !patient.serum.creatinine.is_finite() || patient.serum.creatinine <= 0.0 {
        fail(
            &mut failures,
            "serum.creatinine",
            format!("{} must be greater than zero", patient.serum.creatinine),
        );
    }

    // Everything else on the panels: finite and non-negative.
    let non_negative = [
        ("vitals.systolic_bp", patient.vitals.systolic_bp),
        ("vitals.diastolic_bp", patient.vitals.diastolic_bp),
        ("vitals.glucose", patient.vitals.glucose),
        ("serum.bun", patient.serum.bun),
        ("serum.calcium", patient.serum.calcium),
        ("serum.potassium", patient.serum.potassium),
        ("serum.sodium", patient.serum.sodium),
        ("serum.phosphorus", patient.serum.phosphorus),
        ("serum.albumin", patient.serum.albumin),
        ("serum.uric_acid", patient.serum.uric_acid),
        ("serum.hemoglobin", patient.serum.hemoglobin),
        ("serum.hba1c", patient.serum.hba1c),
        ("serum.cholesterol", patient.serum.cholesterol),
        ("serum.triglycerides", patient.serum.triglycerides),
        ("urine.protein_mg_day", patient.urine.protein_mg_day),
        ("urine.albumin_mg_day", patient.urine.albumin_mg_day),
        ("markers.pth", patient.markers.pth),
        ("markers.vitamin_d", patient.markers.vitamin_d),
        ("markers.crp", patient.markers.crp),
        ("lifestyle.protein_intake_g", patient.lifestyle.protein_intake_g),
        ("lifestyle.salt_intake_g", patient.lifestyle.salt_intake_g),
        ("lifestyle.water_intake_l", patient.lifestyle.water_intake_l),
        ("lifestyle.alcohol_units_week", patient.lifestyle.alcohol_units_week),
    ];
    for (field, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            fail(&mut failures, field, format!("{} must be a non-negative finite number", value));
        }
    }

    // Bounded lifestyle scales.
    let hydration = patient.lifestyle.hydration_level;
    if !hydration.is_finite() || !(1.0..=10.0).contains(&hydration) {
        fail(&mut failures, "lifestyle.hydration_level", format!("{} outside 1–10", hydration));
    }
    let exercise = patient.lifestyle.exercise_level;
    if !exercise.is_finite() || !(0.0..=10.0).contains(&exercise) {
        fail(&mut failures, "lifestyle.exercise_level", format!("{} outside 0–10", exercise));
    }

    failures
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "demographics": { "age": 50, "gender": "male" },
        "serum": { "creatinine": 1.0 }
    }"#;

    #[test]
    fn minimal_document_passes_both_phases() {
        let validator = IntakeValidator::new();
        let report = validator.validate(MINIMAL).unwrap();
        assert!(report.passed, "failures: {:?}", report.failures);

        let patient = validator.parse_patient(MINIMAL).unwrap();
        assert_eq!(patient.demographics.age, 50);
        assert_eq!(patient.serum.creatinine, 1.0);
    }

    #[test]
    fn non_json_input_is_a_schema_validation_error() {
        let validator = IntakeValidator::new();
        let err = validator.validate("not json at all").unwrap_err();
        assert!(matches!(err, NephraError::SchemaValidation { .. }));
    }

    #[test]
    fn missing_creatinine_fails_structurally() {
        let validator = IntakeValidator::new();
        let json = r#"{
            "demographics": { "age": 50, "gender": "male" },
            "serum": {}
        }"#;
        let report = validator.validate(json).unwrap();
        assert!(!report.passed);
        assert!(report.failures.iter().any(|f| f.message.contains("creatinine")));
    }

    #[test]
    fn unknown_gender_fails_structurally() {
        let validator = IntakeValidator::new();
        let json = r#"{
            "demographics": { "age": 50, "gender": "other" },
            "serum": { "creatinine": 1.0 }
        }"#;
        let report = validator.validate(json).unwrap();
        assert!(!report.passed);
    }

    #[test]
    fn zero_creatinine_fails_semantically() {
        let validator = IntakeValidator::new();
        let json = r#"{
            "demographics": { "age": 50, "gender": "male" },
            "serum": { "creatinine": 0.0 }
        }"#;

        let report = validator.validate(json).unwrap();
        assert!(!report.passed);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].field, "serum.creatinine");

        let err = validator.parse_patient(json).unwrap_err();
        assert!(matches!(err, NephraError::InvalidInput { .. }));
    }

    #[test]
    fn negative_panel_value_fails_semantically() {
        let validator = IntakeValidator::new();
        let json = r#"{
            "demographics": { "age": 50, "gender": "male" },
            "serum": { "creatinine": 1.0, "uric_acid": -2.0 }
        }"#;
        let report = validator.validate(json).unwrap();
        assert!(!report.passed);
        assert!(report.failures.iter().any(|f| f.field == "serum.uric_acid"));
    }

    #[test]
    fn hydration_scale_is_bounded() {
        let validator = IntakeValidator::new();
        let json = r#"{
            "demographics": { "age": 50, "gender": "male" },
            "serum": { "creatinine": 1.0 },
            "lifestyle": { "hydration_level": 0 }
        }"#;
        let report = validator.validate(json).unwrap();
        assert!(!report.passed);
        assert!(report.failures.iter().any(|f| f.field == "lifestyle.hydration_level"));
    }

    #[test]
    fn failures_accumulate_across_fields() {
        let validator = IntakeValidator::new();
        let json = r#"{
            "demographics": { "age": 0, "gender": "male" },
            "serum": { "creatinine": 1.0, "bun": -5.0 },
            "lifestyle": { "exercise_level": 12 }
        }"#;
        let report = validator.validate(json).unwrap();
        assert!(!report.passed);
        assert_eq!(report.failures.len(), 3);
    }
}
