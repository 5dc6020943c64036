pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::gate;
use crate::types::config::GateConfig;
use crate::types::report::{InputFile, ScoreReport};
use crate::types::scoring::ScoreResult;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn build_report(result: ScoreResult, gate: GateConfig, inputs: Vec<InputFile>) -> ScoreReport {
    let failing_faces = gate::faces_below_min_each(&result.faces, &gate);
    ScoreReport {
        result,
        gate,
        failing_faces,
        inputs,
        generated_at: Utc::now().to_rfc3339(),
    }
}

pub fn describe_input(role: &'static str, path: &Path, bytes: &[u8]) -> InputFile {
    InputFile {
        role,
        path: path.display().to_string(),
        sha256: sha256_hex(bytes),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
pub(crate) fn sample_report() -> ScoreReport {
    use crate::engine;
    use crate::test_support::{reference_config, reference_metrics};

    let config = reference_config();
    let result = engine::evaluate(&config, &reference_metrics());
    let mut report = build_report(
        result,
        config.gate,
        vec![describe_input("metrics", Path::new("metrics.json"), b"{}")],
    );
    report.generated_at = "2026-01-01T00:00:00+00:00".to_string();
    report
}
