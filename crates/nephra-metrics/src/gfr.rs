//! GFR estimation and KDIGO staging.
//!
//! The estimate uses the CKD-EPI 2021 race-free equation. Staging thresholds
//! are the fixed KDIGO cut points; they are part of the engine's contract,
//! not tunables.

use nephra_contracts::metrics::{AlbuminuriaCategory, GfrCategory};
use nephra_contracts::patient::Gender;

use crate::round1;

/// Lower and upper clamp bounds for every GFR the engine produces, mL/min.
pub const GFR_MIN: f64 = 3.0;
pub const GFR_MAX: f64 = 160.0;

/// Estimate GFR (mL/min) via CKD-EPI 2021.
///
/// `creatinine` is serum creatinine in mg/dL and must be > 0 — the caller
/// guarantees this at the intake boundary; the division here is unguarded.
/// The result is clamped into [`GFR_MIN`, `GFR_MAX`] and rounded to one
/// decimal place.
pub fn estimate_gfr(creatinine: f64, age: u32, gender: Gender) -> f64 {
    let (kappa, alpha) = match gender {
        Gender::Female => (0.7, -0.241),
        Gender::Male => (0.9, -0.302),
    };

    let ratio = creatinine / kappa;
    let min_r = ratio.min(1.0);
    let max_r = ratio.max(1.0);

    let mut gfr = 142.0 * min_r.powf(alpha) * max_r.powf(-1.2) * 0.9938_f64.powi(age as i32);
    if gender == Gender::Female {
        gfr *= 1.012;
    }

    round1(gfr.clamp(GFR_MIN, GFR_MAX))
}

/// Map a GFR to its KDIGO G category.
pub fn gfr_category(gfr: f64) -> GfrCategory {
    if gfr >= 90.0 {
        GfrCategory::G1
    } else if gfr >= 60.0 {
        GfrCategory::G2
    } else if gfr >= 45.0 {
        GfrCategory::G3a
    } else if gfr >= 30.0 {
        GfrCategory::G3b
    } else if gfr >= 15.0 {
        GfrCategory::G4
    } else {
        GfrCategory::G5
    }
}

/// Map a GFR to its numeric CKD stage. G3a and G3b both collapse to stage 3.
pub fn ckd_stage(gfr: f64) -> u8 {
    match gfr_category(gfr) {
        GfrCategory::G1 => 1,
        GfrCategory::G2 => 2,
        GfrCategory::G3a | GfrCategory::G3b => 3,
        GfrCategory::G4 => 4,
        GfrCategory::G5 => 5,
    }
}

/// Map urine albumin excretion (mg/day) to its KDIGO A category.
pub fn albuminuria_category(albumin_mg_day: f64) -> AlbuminuriaCategory {
    if albumin_mg_day < 30.0 {
        AlbuminuriaCategory::A1
    } else if albumin_mg_day <= 300.0 {
        AlbuminuriaCategory::A2
    } else {
        AlbuminuriaCategory::A3
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
