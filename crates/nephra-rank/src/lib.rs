//! # nephra-rank
//!
//! Combinatorial treatment ranking for the NEPHRA engine: enumerate
//! candidate regimens, simulate each against the baseline, and rank by a
//! fixed composite score. Reuses the simulator and interaction detector —
//! nothing here computes an effect on its own.

pub mod ranker;

pub use ranker::{rank, MAX_POOL};

// ── Shared test fixtures ─────────────────────────────────────────────────────
