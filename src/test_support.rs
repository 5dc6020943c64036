use crate::types::config::ScoreConfig;
use crate::types::metrics::MetricsSnapshot;
use serde_json::Value;

const REFERENCE_CONFIG: &str = include_str!("../tests/fixtures/score-function.toml");
const REFERENCE_METRICS: &str = include_str!("../tests/fixtures/metrics.sample.json");

pub fn reference_config() -> ScoreConfig {
    let config: ScoreConfig =
        toml::from_str(REFERENCE_CONFIG).expect("reference config should parse");
    config.validate().expect("reference config should validate");
    config
}

pub fn reference_metrics_json() -> Value {
    serde_json::from_str(REFERENCE_METRICS).expect("reference metrics should parse")
}

pub fn reference_metrics() -> MetricsSnapshot {
    MetricsSnapshot::from_value(reference_metrics_json()).expect("reference metrics should load")
}
