use super::shaping::{clip, penalty};
use crate::types::config::{SpecThresholds, SpecWeights};
use crate::types::metrics::SpecMetrics;
use crate::types::scoring::Score;

const AMBIGUITY_SCALE: f64 = 0.3;
const CONFLICT_SCALE: f64 = 0.3;

/// Spec conformance: requirement coverage, traceability and examples, minus
/// ambiguity and conflicts.
pub fn spec_score(
    weights: &SpecWeights,
    thresholds: &SpecThresholds,
    metrics: &SpecMetrics,
    k: f64,
) -> Score {
    let rc = clip(metrics.rc);
    let tr = clip(metrics.tr);
    let am = clip(metrics.am);
    let cn = clip(metrics.cn);
    let ex = clip(metrics.ex);

    let base = 100.0
        * (weights.rc * rc
            + weights.tr * tr
            + weights.am_inv * (1.0 - am)
            + weights.cn_inv * (1.0 - cn)
            + weights.ex * ex);
    let penalties = penalty(AMBIGUITY_SCALE, am, thresholds.ambig_tau, k)
        * penalty(CONFLICT_SCALE, cn, thresholds.conflict_tau, k);
    base * penalties
}
