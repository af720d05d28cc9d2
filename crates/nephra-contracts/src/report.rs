//! The frozen assessment bundle consumed by report/export collaborators.
//!
//! Export surfaces (PDF, print) perform no computation of their own — they
//! receive this bundle fully populated and only format it. The engine never
//! reads a bundle back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::KidneyMetrics;
use crate::patient::PatientData;
use crate::pharma::DrugInteraction;
use crate::treatment::{LifestyleAdjustments, Treatment, TreatmentRanking};

/// One time-projection entry: the same starting snapshot projected
/// independently to a fixed horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Days ahead of the snapshot.
    pub days_ahead: u32,
    pub metrics: KidneyMetrics,
}

/// The complete, immutable output bundle of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub patient: PatientData,
    pub baseline: KidneyMetrics,
    pub simulated: KidneyMetrics,
    pub treatments: Vec<Treatment>,
    pub adjustments: LifestyleAdjustments,
    pub interactions: Vec<DrugInteraction>,
    pub rankings: Vec<TreatmentRanking>,
    /// Projections of the simulated snapshot, one per horizon,
    /// each computed independently (never chained).
    pub projections: Vec<ProjectionPoint>,
    pub generated_at: DateTime<Utc>,
}

/// The fixed horizon set used by report surfaces, in days.
pub const PROJECTION_HORIZONS_DAYS: [u32; 5] = [7, 30, 90, 180, 365];
