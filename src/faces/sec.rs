use super::shaping::clip;
use crate::types::config::SecWeights;
use crate::types::metrics::SecMetrics;
use crate::types::scoring::Score;

/// Discrete severity gate: any critical finding quarters the face.
const CRITICAL_MULTIPLIER: f64 = 0.25;

pub fn sec_score(weights: &SecWeights, metrics: &SecMetrics) -> Score {
    let vv = 1.0 - clip(metrics.cvss_sum);
    let se = clip(metrics.se);
    let dpv = clip(metrics.dep_vulns);
    let at = clip(metrics.at);
    let ml = clip(metrics.ml);

    let score = 100.0
        * (weights.vv * vv
            + weights.se * se
            + weights.dpv_inv * (1.0 - dpv)
            + weights.at * at
            + weights.ml * ml);
    if metrics.critical_count >= 1 {
        score * CRITICAL_MULTIPLIER
    } else {
        score
    }
}
