use super::shaping::{clip, penalty};
use crate::types::config::{CodeThresholds, CodeWeights};
use crate::types::metrics::CodeMetrics;
use crate::types::scoring::Score;

const COMPLEXITY_SCALE: f64 = 0.4;

pub fn code_score(
    weights: &CodeWeights,
    thresholds: &CodeThresholds,
    metrics: &CodeMetrics,
    k: f64,
) -> Score {
    let sa = clip(metrics.sa);
    let cc = clip(metrics.cc);
    let dp = clip(metrics.dp);
    let de = clip(metrics.de);
    let dt = clip(metrics.dt);
    let pf = clip(metrics.pf);

    let base = 100.0
        * (weights.sa * sa
            + weights.cc_inv * (1.0 - cc)
            + weights.dp_inv * (1.0 - dp)
            + weights.de * de
            + weights.dt * dt
            + weights.pf * pf);
    base * penalty(COMPLEXITY_SCALE, cc, thresholds.cc_tau, k)
}
