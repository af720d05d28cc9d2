//! # nephra-metrics
//!
//! Baseline metric derivation for the NEPHRA engine: a pure function from a
//! validated `PatientData` snapshot to a fresh `KidneyMetrics` assessment.
//!
//! Layout:
//!
//! - `gfr`        — CKD-EPI 2021 estimate and KDIGO G/A staging
//! - `scores`     — the penalty-accumulation risk and health score family
//! - `composite`  — efficiency, biological age, heatmap, overall score
//! - `calculator` — `calculate_baseline`, assembling the full assessment
//!
//! The composite helpers are public on purpose: the treatment simulator
//! recomputes every derived field from new primary values with the exact
//! formulas used here.

pub mod calculator;
pub mod composite;
pub mod gfr;
pub mod scores;

pub use calculator::calculate_baseline;

/// Round to one decimal place. Applied to every score and to GFR at the
/// point of computation so repeated derivations are bit-identical.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp a 0–100-scaled score into its declared range.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

// ── Shared test fixtures ─────────────────────────────────────────────────────
