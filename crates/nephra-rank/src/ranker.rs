//! Combinatorial treatment ranking.
//!
//! The ranker enumerates every subset of size 1, 2, and 3 from the
//! candidate pool — singles first, then pairs, then triples, in index order
//! — simulates each against the baseline with the patient's unchanged
//! lifestyle values, detects interactions, scores the outcome, and returns
//! the top ten by descending score. The sort is stable, so ties resolve to
//! generation order.

use tracing::info;

use nephra_contracts::error::{NephraError, NephraResult};
use nephra_contracts::metrics::KidneyMetrics;
use nephra_contracts::patient::PatientData;
use nephra_contracts::pharma::InteractionSeverity;
use nephra_contracts::treatment::{LifestyleAdjustments, Treatment, TreatmentRanking};
use nephra_sim::TreatmentSimulator;

/// Largest candidate pool the ranker accepts.
///
/// Subset enumeration is cubic in the pool size; 20 candidates already mean
/// 1350 combinations, which is ample for any realistic clinical pool.
pub const MAX_POOL: usize = 20;

/// Number of ranked combinations returned.
const TOP_N: usize = 10;

// Score weights.
const GFR_WEIGHT: f64 = 3.0;
const RISK_WEIGHT: f64 = 1.5;
const OVERALL_WEIGHT: f64 = 2.0;
const PENALTY_WEIGHT: f64 = 2.0;

// Aggregate risk-reduction blend.
const CV_SHARE: f64 = 0.5;
const STONE_SHARE: f64 = 0.3;

// Interaction penalty points.
const SEVERE_PENALTY: f64 = 30.0;
const MODERATE_PENALTY: f64 = 10.0;

/// Rank treatment combinations from `pool` against `baseline`.
///
/// Returns an empty list for an empty pool and
/// `NephraError::PoolTooLarge` for pools beyond [`MAX_POOL`]. Subsets of
/// size four and above are never generated.
pub fn rank(
    simulator: &TreatmentSimulator,
    baseline: &KidneyMetrics,
    patient: &PatientData,
    pool: &[Treatment],
) -> NephraResult<Vec<TreatmentRanking>> {
    if pool.is_empty() {
        return Ok(Vec::new());
    }
    if pool.len() > MAX_POOL {
        return Err(NephraError::PoolTooLarge {
            count: pool.len(),
            limit: MAX_POOL,
        });
    }

    // Lifestyle held at the patient's own values: ranking isolates the
    // pharmacological contribution of each combination.
    let adjustments = LifestyleAdjustments::from_patient(patient);

    let combinations = enumerate_combinations(pool.len());
    let mut rankings: Vec<TreatmentRanking> = combinations
        .iter()
        .map(|combo| {
            let treatments: Vec<Treatment> = combo.iter().map(|&i| pool[i].clone()).collect();
            evaluate(simulator, baseline, patient, &adjustments, treatments)
        })
        .collect();

    // Stable descending sort: ties keep generation order
    // (singles, then pairs, then triples, in index order).
    rankings.sort_by(|a, b| b.score.partial_cmp(&a.score).expect("scores are finite"));
    rankings.truncate(TOP_N);

    info!(
        pool = pool.len(),
        combinations = combinations.len(),
        returned = rankings.len(),
        "treatment ranking complete"
    );

    Ok(rankings)
}

/// Index subsets of sizes 1–3, in generation order.
fn enumerate_combinations(n: usize) -> Vec<Vec<usize>> {
    let mut combos = Vec::new();
    for i in 0..n {
        combos.push(vec![i]);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            combos.push(vec![i, j]);
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                combos.push(vec![i, j, k]);
            }
        }
    }
    combos
}

/// Simulate one combination and score the outcome.
fn evaluate(
    simulator: &TreatmentSimulator,
    baseline: &KidneyMetrics,
    patient: &PatientData,
    adjustments: &LifestyleAdjustments,
    treatments: Vec<Treatment>,
) -> TreatmentRanking {
    let simulated = simulator.simulate(baseline, patient, &treatments, adjustments);
    let interactions = simulator.detect_interactions(&treatments);

    let gfr_delta = simulated.gfr - baseline.gfr;
    let risk_reduction = (baseline.ckd_progression_risk - simulated.ckd_progression_risk)
        + CV_SHARE * (baseline.cardiovascular_risk - simulated.cardiovascular_risk)
        + STONE_SHARE * (baseline.stone_risk - simulated.stone_risk);
    let overall_delta = simulated.overall_health_score - baseline.overall_health_score;

    let severe = interactions
        .iter()
        .filter(|i| i.severity == InteractionSeverity::Severe)
        .count();
    let moderate = interactions
        .iter()
        .filter(|i| i.severity == InteractionSeverity::Moderate)
        .count();
    let side_effect_penalty = SEVERE_PENALTY * severe as f64 + MODERATE_PENALTY * moderate as f64;

    let score = GFR_WEIGHT * gfr_delta + RISK_WEIGHT * risk_reduction
        + OVERALL_WEIGHT * overall_delta
        - PENALTY_WEIGHT * side_effect_penalty;

    let reasoning = reasoning_for(
        treatments.len(),
        gfr_delta,
        risk_reduction,
        interactions.len(),
        severe,
    );

    TreatmentRanking {
        treatments,
        score,
        gfr_delta,
        risk_reduction,
        side_effect_penalty,
        interaction_count: interactions.len(),
        reasoning,
    }
}

/// Build the templated reasoning line for one evaluated combination.
fn reasoning_for(
    regimen_size: usize,
    gfr_delta: f64,
    risk_reduction: f64,
    interaction_count: usize,
    severe_count: usize,
) -> String {
    let regimen = match regimen_size {
        1 => "Single-agent regimen",
        2 => "Two-drug regimen",
        _ => "Three-drug regimen",
    };

    let filtration = if gfr_delta >= 5.0 {
        format!("substantially improves filtration (+{:.1} mL/min)", gfr_delta)
    } else if gfr_delta >= 2.0 {
        format!("moderately improves filtration (+{:.1} mL/min)", gfr_delta)
    } else if gfr_delta > 0.0 {
        format!("modestly improves filtration (+{:.1} mL/min)", gfr_delta)
    } else if gfr_delta == 0.0 {
        "leaves filtration unchanged".to_string()
    } else {
        format!("reduces filtration ({:.1} mL/min)", gfr_delta)
    };

    let risk = if risk_reduction >= 15.0 {
        "strong aggregate risk reduction"
    } else if risk_reduction >= 5.0 {
        "meaningful aggregate risk reduction"
    } else if risk_reduction > 0.0 {
        "modest aggregate risk reduction"
    } else {
        "no aggregate risk reduction"
    };

    let safety = if interaction_count == 0 {
        "no known drug interactions".to_string()
    } else if severe_count > 0 {
        format!(
            "{} interaction(s) including {} severe — use with caution",
            interaction_count, severe_count
        )
    } else {
        format!("{} non-severe interaction(s)", interaction_count)
    };

    format!("{}: {}; {}; {}.", regimen, filtration, risk, safety)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::neutral_patient;
    use nephra_sim::TreatmentSimulator;

    fn treatment(medicine: &str) -> Treatment {
        Treatment::new(medicine, "10 mg", "once daily", 1)
    }

    fn setup() -> (TreatmentSimulator, PatientData, KidneyMetrics) {
        let simulator = TreatmentSimulator::builtin();
        let patient = neutral_patient();
        let baseline = nephra_metrics::calculate_baseline(&patient);
        (simulator, patient, baseline)
    }

    #[test]
    fn empty_pool_returns_empty_list() {
        let (simulator, patient, baseline) = setup();
        let rankings = rank(&simulator, &baseline, &patient, &[]).unwrap();
        assert!(rankings.is_empty());
    }

    #[test]
    fn oversized_pool_is_rejected() {
        let (simulator, patient, baseline) = setup();
        let pool: Vec<Treatment> = (0..21).map(|i| treatment(&format!("drug-{}", i))).collect();

        let err = rank(&simulator, &baseline, &patient, &pool).unwrap_err();
        assert!(matches!(err, NephraError::PoolTooLarge { count: 21, limit: 20 }));
    }

    #[test]
    fn returns_at_most_ten_sorted_descending() {
        let (simulator, patient, baseline) = setup();
        let pool = vec![
            treatment("Lisinopril"),
            treatment("Empagliflozin"),
            treatment("Atorvastatin"),
            treatment("Allopurinol"),
            treatment("Amlodipine"),
        ];

        let rankings = rank(&simulator, &baseline, &patient, &pool).unwrap();

        assert_eq!(rankings.len(), 10);
        for pair in rankings.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "rankings must be non-increasing: {} then {}",
                pair[0].score,
                pair[1].score
            );
        }
    }

    /// No subset of size four is ever generated.
    #[test]
    fn combinations_stop_at_size_three() {
        let (simulator, patient, baseline) = setup();
        let pool = vec![
            treatment("Lisinopril"),
            treatment("Empagliflozin"),
            treatment("Atorvastatin"),
            treatment("Allopurinol"),
        ];

        let rankings = rank(&simulator, &baseline, &patient, &pool).unwrap();
        assert!(rankings.iter().all(|r| r.treatments.len() <= 3));
        // And size-3 subsets do appear.
        assert!(rankings.iter().any(|r| r.treatments.len() == 3));
    }

    #[test]
    fn enumeration_order_is_singles_pairs_triples() {
        let combos = enumerate_combinations(3);
        assert_eq!(
            combos,
            vec![
                vec![0], vec![1], vec![2],
                vec![0, 1], vec![0, 2], vec![1, 2],
                vec![0, 1, 2],
            ]
        );
    }

    /// A severely interacting pair is penalized below its members' safer
    /// alternatives.
    #[test]
    fn dual_raas_pair_is_penalized() {
        let (simulator, patient, baseline) = setup();
        let pool = vec![treatment("Lisinopril"), treatment("Losartan")];

        let rankings = rank(&simulator, &baseline, &patient, &pool).unwrap();

        let pair = rankings
            .iter()
            .find(|r| r.treatments.len() == 2)
            .expect("pair must be evaluated");
        assert_eq!(pair.interaction_count, 1);
        assert_eq!(pair.side_effect_penalty, 30.0);
        assert!(pair.reasoning.contains("use with caution"));

        // Both singles outrank the interacting pair.
        for single in rankings.iter().filter(|r| r.treatments.len() == 1) {
            assert!(single.score > pair.score);
        }
    }

    #[test]
    fn ranking_is_deterministic() {
        let (simulator, patient, baseline) = setup();
        let pool = vec![
            treatment("Lisinopril"),
            treatment("Empagliflozin"),
            treatment("Atorvastatin"),
        ];

        let a = rank(&simulator, &baseline, &patient, &pool).unwrap();
        let b = rank(&simulator, &baseline, &patient, &pool).unwrap();

        let scores_a: Vec<f64> = a.iter().map(|r| r.score).collect();
        let scores_b: Vec<f64> = b.iter().map(|r| r.score).collect();
        assert_eq!(scores_a, scores_b);
    }

    #[test]
    fn reasoning_mentions_regimen_size_and_safety() {
        let (simulator, patient, baseline) = setup();
        let pool = vec![treatment("Empagliflozin")];

        let rankings = rank(&simulator, &baseline, &patient, &pool).unwrap();
        assert_eq!(rankings.len(), 1);
        let reasoning = &rankings[0].reasoning;

        assert!(reasoning.starts_with("Single-agent regimen"));
        assert!(reasoning.contains("no known drug interactions"));
    }
}
