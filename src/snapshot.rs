use crate::error::{Result, ScoreError};
use crate::types::metrics::MetricsSnapshot;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Reads a JSON metrics snapshot. Returns the raw bytes too, so callers can
/// fingerprint exactly what was scored.
pub fn load_metrics(path: &Path) -> Result<(MetricsSnapshot, Vec<u8>)> {
    let bytes = std::fs::read(path).map_err(|source| ScoreError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| ScoreError::MetricsParse(format!("{}: {}", path.display(), e)))?;
    let snapshot = MetricsSnapshot::from_value(value)?;

    info!(
        path = %path.display(),
        uncertainty_sigma = snapshot.uncertainty_sigma,
        "metrics loaded"
    );
    Ok((snapshot, bytes))
}
