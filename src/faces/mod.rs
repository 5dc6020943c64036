pub mod code;
pub mod dep;
pub mod pr;
pub mod sec;
pub mod shaping;
pub mod spec;

use crate::types::config::ScoreConfig;
use crate::types::metrics::MetricsSnapshot;
use crate::types::scoring::FaceScores;
use tracing::debug;

pub fn compute_faces(config: &ScoreConfig, metrics: &MetricsSnapshot) -> FaceScores {
    let k = config.k_steep;
    let weights = &config.weights;
    let thresholds = &config.thresholds;

    let faces = FaceScores {
        spec: spec::spec_score(&weights.spec, &thresholds.spec, &metrics.spec, k),
        code: code::code_score(&weights.code, &thresholds.code, &metrics.code, k),
        test: test::test_score(&weights.test, &thresholds.test, &metrics.test, k),
        sec: sec::sec_score(&weights.sec, &metrics.sec),
        pr: pr::pr_score(&weights.pr, &thresholds.pr, &metrics.pr, k),
        dep: dep::dep_score(&weights.dep, &thresholds.dep, &metrics.dep, k),
    };

    for (face, score) in faces.iter() {
        debug!(face = %face, score, "face scored");
    }
    faces
}
