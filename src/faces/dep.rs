use super::shaping::{clip, penalty};
use crate::types::config::{DepThresholds, DepWeights};
use crate::types::metrics::DepMetrics;
use crate::types::scoring::Score;

const PERF_REGRESSION_SCALE: f64 = 0.5;
const CHANGE_FAILURE_SCALE: f64 = 0.3;

/// Deployment health. Only `SR` counts positively; every other signal is a cost.
pub fn dep_score(
    weights: &DepWeights,
    thresholds: &DepThresholds,
    metrics: &DepMetrics,
    k: f64,
) -> Score {
    let sr = clip(metrics.sr);
    let cfr = clip(metrics.cfr);
    let mt = clip(metrics.mt);
    let rbk = clip(metrics.rbk);
    let prg = clip(metrics.prg);
    let eb = clip(metrics.eb);

    let base = 100.0
        * (weights.sr * sr
            + weights.cfr_inv * (1.0 - cfr)
            + weights.mt_inv * (1.0 - mt)
            + weights.rbk_inv * (1.0 - rbk)
            + weights.prg_inv * (1.0 - prg)
            + weights.eb_inv * (1.0 - eb));
    let penalties = penalty(PERF_REGRESSION_SCALE, prg, thresholds.perf_reg_tau, k)
        * penalty(CHANGE_FAILURE_SCALE, cfr, thresholds.cfr_tau, k);
    base * penalties
}
