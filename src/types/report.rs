use crate::types::config::GateConfig;
use crate::types::scoring::{Face, ScoreResult};

/// One file that fed a score run, pinned by the digest of its raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFile {
    pub role: &'static str,
    pub path: String,
    pub sha256: String,
}

/// Everything a renderer needs: the engine result plus the context it ran in.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub result: ScoreResult,
    pub gate: GateConfig,
    pub failing_faces: Vec<Face>,
    pub inputs: Vec<InputFile>,
    pub generated_at: String,
}
