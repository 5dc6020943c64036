use crate::types::report::ScoreReport;

/// Only the engine result goes to JSON; report context is Markdown-only.
pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&report.result)
}
