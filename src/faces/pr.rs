use super::shaping::{clip, penalty};
use crate::types::config::{PrThresholds, PrWeights};
use crate::types::metrics::PrMetrics;
use crate::types::scoring::Score;

const RISK_SCALE: f64 = 0.4;

pub fn pr_score(
    weights: &PrWeights,
    thresholds: &PrThresholds,
    metrics: &PrMetrics,
    k: f64,
) -> Score {
    let rr = clip(metrics.rr);
    let risk = clip(metrics.risk);
    let dv = clip(metrics.dv);
    let rb = clip(metrics.rb);
    let ci = clip(metrics.ci);

    let base = 100.0
        * (weights.rr * rr
            + weights.rk_inv * (1.0 - risk)
            + weights.dv * dv
            + weights.rb_inv * (1.0 - rb)
            + weights.ci * ci);
    base * penalty(RISK_SCALE, risk, thresholds.risk_tau, k)
}
