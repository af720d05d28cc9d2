//! # nephra-sim
//!
//! Treatment-effect simulation and time projection for the NEPHRA engine.
//!
//! - `effects`    — per-class `EffectBundle` rows and the `EffectTable`
//! - `simulator`  — `TreatmentSimulator`, deriving a simulated snapshot
//!                  from a baseline, treatments, and lifestyle adjustments
//! - `projection` — `project`, the exponential-approach forecast model
//!
//! Everything here is a stateless pure transformation: snapshots go in,
//! fresh snapshots come out, and no call observes a previous one.

pub mod effects;
pub mod projection;
pub mod simulator;

pub use effects::{EffectBundle, EffectTable};
pub use projection::project;
pub use simulator::TreatmentSimulator;

// ── Shared test fixtures ─────────────────────────────────────────────────────
