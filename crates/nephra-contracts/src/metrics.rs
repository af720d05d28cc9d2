//! The derived kidney-health assessment.
//!
//! `KidneyMetrics` is a pure value object produced fresh by every
//! calculation. Two snapshots (baseline and simulated) routinely coexist and
//! are never merged in place. Every 0–100 field is clamped at the point of
//! computation; GFR is clamped into [3, 160] and rounded to one decimal.

use serde::{Deserialize, Serialize};

/// KDIGO GFR category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GfrCategory {
    G1,
    G2,
    G3a,
    G3b,
    G4,
    G5,
}

impl std::fmt::Display for GfrCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::G1 => "G1",
            Self::G2 => "G2",
            Self::G3a => "G3a",
            Self::G3b => "G3b",
            Self::G4 => "G4",
            Self::G5 => "G5",
        };
        write!(f, "{}", label)
    }
}

/// KDIGO albuminuria category from urine albumin excretion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlbuminuriaCategory {
    /// < 30 mg/day — normal to mildly increased.
    A1,
    /// 30–300 mg/day — moderately increased.
    A2,
    /// > 300 mg/day — severely increased.
    A3,
}

impl std::fmt::Display for AlbuminuriaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => "A3",
        };
        write!(f, "{}", label)
    }
}

/// Per-region scores for the anatomical risk heatmap, each 0–100
/// (higher is healthier). Fixed linear combinations of the top-level scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskHeatmapData {
    pub glomerular: f64,
    pub nephron: f64,
    pub cortex: f64,
    pub medulla: f64,
    pub interstitial: f64,
    pub collecting_system: f64,
    pub vascular: f64,
}

/// The multi-dimensional kidney-health assessment.
///
/// Risk scores (`*_risk`, `stress_index`) read higher-is-worse; health
/// scores (`*_score`, `*_health`, `*_balance`, `efficiency`,
/// `perfusion_index`) read higher-is-better. All are 0–100 except `gfr`
/// (mL/min, [3, 160]) and `kidney_biological_age` (years).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KidneyMetrics {
    // ── Filtration ───────────────────────────────────────────────────────────
    /// Estimated GFR in mL/min, CKD-EPI 2021 race-free.
    pub gfr: f64,
    pub gfr_category: GfrCategory,
    /// Numeric CKD stage 1–5 (G3a and G3b both map to stage 3).
    pub ckd_stage: u8,
    pub albuminuria_category: AlbuminuriaCategory,

    // ── Serum echoes ─────────────────────────────────────────────────────────
    pub creatinine: f64,
    pub bun: f64,
    pub uric_acid: f64,
    pub bun_creatinine_ratio: f64,

    // ── Composites ───────────────────────────────────────────────────────────
    /// Filtration efficiency: GFR as a share of 120 mL/min, floored at 5.
    pub efficiency: f64,
    /// Effective "kidney age" in years, derived from efficiency and stress.
    pub kidney_biological_age: f64,

    // ── Risk scores (higher is worse) ────────────────────────────────────────
    pub stone_risk: f64,
    pub stress_index: f64,
    pub ckd_progression_risk: f64,
    pub cardiovascular_risk: f64,
    pub aki_risk: f64,
    pub infection_risk: f64,

    // ── Health scores (higher is better) ─────────────────────────────────────
    pub electrolyte_balance: f64,
    pub mineral_bone_score: f64,
    pub anemia_score: f64,
    pub inflammation_score: f64,
    pub perfusion_index: f64,
    pub nephron_health: f64,
    pub interstitial_health: f64,
    pub vascular_health: f64,

    /// Fixed weighted sum over the component scores, rounded to a whole number.
    pub overall_health_score: f64,

    pub heatmap: RiskHeatmapData,
}
