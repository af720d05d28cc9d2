//! # nephra-contracts
//!
//! Shared types and contracts for the NEPHRA kidney-health assessment engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod error;
pub mod metrics;
pub mod patient;
pub mod pharma;
pub mod report;
pub mod treatment;

#[cfg(test)]
mod tests {
    use super::*;
    use error::NephraError;
    use metrics::{AlbuminuriaCategory, GfrCategory};
    use patient::{Condition, Gender, SmokingStatus};
    use pharma::{DrugClass, InteractionSeverity};
    use treatment::{Treatment, TreatmentId};

    // ── Serde round-trips ────────────────────────────────────────────────────

    #[test]
    fn gender_round_trips_kebab_case() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
        let decoded: Gender = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Gender::Female);
    }

    #[test]
    fn condition_round_trips_kebab_case() {
        let json = serde_json::to_string(&Condition::HeartDisease).unwrap();
        assert_eq!(json, "\"heart-disease\"");
        let decoded: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Condition::HeartDisease);
    }

    #[test]
    fn smoking_status_round_trips() {
        for status in [SmokingStatus::Never, SmokingStatus::Former, SmokingStatus::Current] {
            let json = serde_json::to_string(&status).unwrap();
            let decoded: SmokingStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, status);
        }
    }

    #[test]
    fn drug_class_round_trips_kebab_case() {
        let json = serde_json::to_string(&DrugClass::XanthineOxidaseInhibitor).unwrap();
        assert_eq!(json, "\"xanthine-oxidase-inhibitor\"");
        let decoded: DrugClass = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, DrugClass::XanthineOxidaseInhibitor);
    }

    #[test]
    fn severity_round_trips() {
        let json = serde_json::to_string(&InteractionSeverity::Severe).unwrap();
        assert_eq!(json, "\"severe\"");
        let decoded: InteractionSeverity = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, InteractionSeverity::Severe);
    }

    // ── Display labels ───────────────────────────────────────────────────────

    #[test]
    fn gfr_category_displays_kdigo_labels() {
        assert_eq!(GfrCategory::G1.to_string(), "G1");
        assert_eq!(GfrCategory::G3a.to_string(), "G3a");
        assert_eq!(GfrCategory::G5.to_string(), "G5");
    }

    #[test]
    fn albuminuria_category_displays_labels() {
        assert_eq!(AlbuminuriaCategory::A1.to_string(), "A1");
        assert_eq!(AlbuminuriaCategory::A3.to_string(), "A3");
    }

    #[test]
    fn severity_display_is_lowercase() {
        assert_eq!(InteractionSeverity::Moderate.to_string(), "moderate");
    }

    // ── TreatmentId ──────────────────────────────────────────────────────────

    #[test]
    fn treatment_id_new_produces_unique_values() {
        let ids: Vec<TreatmentId> = (0..100).map(|_| TreatmentId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn treatment_constructor_populates_fields() {
        let t = Treatment::new("Lisinopril", "10 mg", "once daily", 1);
        assert_eq!(t.medicine, "Lisinopril");
        assert_eq!(t.tablets_per_day, 1);
        assert!(t.category.is_none());
    }

    // ── NephraError display messages ─────────────────────────────────────────

    #[test]
    fn error_invalid_input_display() {
        let err = NephraError::InvalidInput {
            field: "serum.creatinine".to_string(),
            reason: "must be greater than zero".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("serum.creatinine"));
        assert!(msg.contains("greater than zero"));
    }

    #[test]
    fn error_config_display() {
        let err = NephraError::ConfigError {
            reason: "missing interaction table".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn error_pool_too_large_display() {
        let err = NephraError::PoolTooLarge { count: 25, limit: 20 };
        let msg = err.to_string();
        assert!(msg.contains("25"));
        assert!(msg.contains("20"));
    }
}
