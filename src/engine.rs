use crate::faces;
use crate::gate;
use crate::types::config::ScoreConfig;
use crate::types::metrics::MetricsSnapshot;
use crate::types::scoring::ScoreResult;

/// Scores one change. Pure: no I/O, no shared state, same inputs give the
/// same bits back.
pub fn evaluate(config: &ScoreConfig, metrics: &MetricsSnapshot) -> ScoreResult {
    let faces = faces::compute_faces(config, metrics);
    gate::aggregate(faces, config, metrics.uncertainty_sigma)
}
