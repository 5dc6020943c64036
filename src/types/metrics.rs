use crate::error::{Result, ScoreError};
use crate::types::scoring::Face;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct SpecMetrics {
    #[serde(rename = "RC")]
    pub rc: f64,
    #[serde(rename = "TR")]
    pub tr: f64,
    #[serde(rename = "AM")]
    pub am: f64,
    #[serde(rename = "CN")]
    pub cn: f64,
    #[serde(rename = "EX")]
    pub ex: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeMetrics {
    #[serde(rename = "SA")]
    pub sa: f64,
    #[serde(rename = "CC")]
    pub cc: f64,
    #[serde(rename = "DP")]
    pub dp: f64,
    #[serde(rename = "DE")]
    pub de: f64,
    #[serde(rename = "DT")]
    pub dt: f64,
    #[serde(rename = "PF")]
    pub pf: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestMetrics {
    #[serde(rename = "CV")]
    pub cv: f64,
    #[serde(rename = "MT")]
    pub mt: f64,
    #[serde(rename = "FL")]
    pub fl: f64,
    #[serde(rename = "SK")]
    pub sk: f64,
    #[serde(rename = "ST")]
    pub st: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecMetrics {
    #[serde(rename = "CVSS_sum")]
    pub cvss_sum: f64,
    #[serde(rename = "SE")]
    pub se: f64,
    pub dep_vulns: f64,
    #[serde(rename = "AT")]
    pub at: f64,
    #[serde(rename = "ML")]
    pub ml: f64,
    #[serde(default)]
    pub critical_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrMetrics {
    #[serde(rename = "RR")]
    pub rr: f64,
    pub risk: f64,
    #[serde(rename = "DV")]
    pub dv: f64,
    #[serde(rename = "RB")]
    pub rb: f64,
    #[serde(rename = "CI")]
    pub ci: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepMetrics {
    #[serde(rename = "SR")]
    pub sr: f64,
    #[serde(rename = "CFR")]
    pub cfr: f64,
    #[serde(rename = "MT")]
    pub mt: f64,
    #[serde(rename = "RBK")]
    pub rbk: f64,
    #[serde(rename = "PRG")]
    pub prg: f64,
    #[serde(rename = "EB")]
    pub eb: f64,
}

/// Normalized inputs for one scoring run. Values are stored as given;
/// clamping happens where the engine reads them.
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub spec: SpecMetrics,
    pub code: CodeMetrics,
    pub test: TestMetrics,
    pub sec: SecMetrics,
    pub pr: PrMetrics,
    pub dep: DepMetrics,
    pub uncertainty_sigma: f64,
}

impl MetricsSnapshot {
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(ScoreError::MetricsParse(
                "metrics document must be a JSON object".to_string(),
            ));
        };

        let uncertainty_sigma = match root.remove("uncertainty_sigma") {
            Some(sigma) => serde_json::from_value::<f64>(sigma).map_err(|e| {
                ScoreError::MetricsParse(format!("uncertainty_sigma: {e}"))
            })?,
            None => 0.0,
        };

        Ok(Self {
            spec: take_face(&mut root, Face::Spec)?,
            code: take_face(&mut root, Face::Code)?,
            test: take_face(&mut root, Face::Test)?,
            sec: take_face(&mut root, Face::Sec)?,
            pr: take_face(&mut root, Face::Pr)?,
            dep: take_face(&mut root, Face::Dep)?,
            uncertainty_sigma,
        })
    }
}

fn take_face<T: DeserializeOwned>(root: &mut Map<String, Value>, face: Face) -> Result<T> {
    let value = root
        .remove(face.as_str())
        .ok_or_else(|| ScoreError::MissingFace(face.to_string()))?;
    serde_json::from_value(value).map_err(|e| ScoreError::InvalidFace {
        face: face.to_string(),
        reason: e.to_string(),
    })
}
