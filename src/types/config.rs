use crate::error::ScoreError;
use crate::types::scoring::Face;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_K_STEEP: f64 = 14.0;
pub const DEFAULT_PROFILE: &str = "sre";
pub const SUPPORTED_VERSION: u32 = 1;
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_k_steep", deserialize_with = "number")]
    pub k_steep: f64,
    pub gate: GateConfig,
    #[serde(default)]
    pub external_weights: BTreeMap<String, ProfileWeights>,
    pub thresholds: Thresholds,
    pub weights: Weights,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_k_steep() -> f64 {
    DEFAULT_K_STEEP
}

/// Gate thresholds, all in score units (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GateConfig {
    #[serde(deserialize_with = "number")]
    pub floor_each: f64,
    #[serde(deserialize_with = "number")]
    pub min_each: f64,
    #[serde(deserialize_with = "number")]
    pub min_geo: f64,
}

/// Per-face multipliers for one profile; an absent face counts as 1.0 and
/// keys naming no face are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProfileWeights {
    #[serde(default, deserialize_with = "optional_number", skip_serializing_if = "Option::is_none")]
    pub spec: Option<f64>,
    #[serde(default, deserialize_with = "optional_number", skip_serializing_if = "Option::is_none")]
    pub code: Option<f64>,
    #[serde(default, deserialize_with = "optional_number", skip_serializing_if = "Option::is_none")]
    pub test: Option<f64>,
    #[serde(default, deserialize_with = "optional_number", skip_serializing_if = "Option::is_none")]
    pub sec: Option<f64>,
    #[serde(default, deserialize_with = "optional_number", skip_serializing_if = "Option::is_none")]
    pub pr: Option<f64>,
    #[serde(default, deserialize_with = "optional_number", skip_serializing_if = "Option::is_none")]
    pub dep: Option<f64>,
}

impl ProfileWeights {
    pub fn get(&self, face: Face) -> Option<f64> {
        match face {
            Face::Spec => self.spec,
            Face::Code => self.code,
            Face::Test => self.test,
            Face::Sec => self.sec,
            Face::Pr => self.pr,
            Face::Dep => self.dep,
        }
    }

    pub fn multiplier(&self, face: Face) -> f64 {
        self.get(face).unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Thresholds {
    pub spec: SpecThresholds,
    pub code: CodeThresholds,
    pub test: TestThresholds,
    pub pr: PrThresholds,
    pub dep: DepThresholds,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpecThresholds {
    #[serde(deserialize_with = "number")]
    pub ambig_tau: f64,
    #[serde(deserialize_with = "number")]
    pub conflict_tau: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeThresholds {
    #[serde(deserialize_with = "number")]
    pub cc_tau: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestThresholds {
    #[serde(deserialize_with = "number")]
    pub low_mt_tau: f64,
    #[serde(deserialize_with = "number")]
    pub low_cv_tau: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrThresholds {
    #[serde(deserialize_with = "number")]
    pub risk_tau: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DepThresholds {
    #[serde(deserialize_with = "number")]
    pub perf_reg_tau: f64,
    #[serde(deserialize_with = "number")]
    pub cfr_tau: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Weights {
    pub spec: SpecWeights,
    pub code: CodeWeights,
    pub test: TestWeights,
    pub sec: SecWeights,
    pub pr: PrWeights,
    pub dep: DepWeights,
}

// Weight records: a missing key contributes zero, an unknown key is rejected.

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecWeights {
    #[serde(rename = "RC", deserialize_with = "number")]
    pub rc: f64,
    #[serde(rename = "TR", deserialize_with = "number")]
    pub tr: f64,
    #[serde(rename = "AM_inv", deserialize_with = "number")]
    pub am_inv: f64,
    #[serde(rename = "CN_inv", deserialize_with = "number")]
    pub cn_inv: f64,
    #[serde(rename = "EX", deserialize_with = "number")]
    pub ex: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodeWeights {
    #[serde(rename = "SA", deserialize_with = "number")]
    pub sa: f64,
    #[serde(rename = "CC_inv", deserialize_with = "number")]
    pub cc_inv: f64,
    #[serde(rename = "DP_inv", deserialize_with = "number")]
    pub dp_inv: f64,
    #[serde(rename = "DE", deserialize_with = "number")]
    pub de: f64,
    #[serde(rename = "DT", deserialize_with = "number")]
    pub dt: f64,
    #[serde(rename = "PF", deserialize_with = "number")]
    pub pf: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestWeights {
    #[serde(rename = "CV", deserialize_with = "number")]
    pub cv: f64,
    #[serde(rename = "MT", deserialize_with = "number")]
    pub mt: f64,
    #[serde(rename = "FL_inv", deserialize_with = "number")]
    pub fl_inv: f64,
    #[serde(rename = "SK_inv", deserialize_with = "number")]
    pub sk_inv: f64,
    #[serde(rename = "ST", deserialize_with = "number")]
    pub st: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecWeights {
    #[serde(rename = "VV", deserialize_with = "number")]
    pub vv: f64,
    #[serde(rename = "SE", deserialize_with = "number")]
    pub se: f64,
    #[serde(rename = "DPV_inv", deserialize_with = "number")]
    pub dpv_inv: f64,
    #[serde(rename = "AT", deserialize_with = "number")]
    pub at: f64,
    #[serde(rename = "ML", deserialize_with = "number")]
    pub ml: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrWeights {
    #[serde(rename = "RR", deserialize_with = "number")]
    pub rr: f64,
    #[serde(rename = "RK_inv", deserialize_with = "number")]
    pub rk_inv: f64,
    #[serde(rename = "DV", deserialize_with = "number")]
    pub dv: f64,
    #[serde(rename = "RB_inv", deserialize_with = "number")]
    pub rb_inv: f64,
    #[serde(rename = "CI", deserialize_with = "number")]
    pub ci: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepWeights {
    #[serde(rename = "SR", deserialize_with = "number")]
    pub sr: f64,
    #[serde(rename = "CFR_inv", deserialize_with = "number")]
    pub cfr_inv: f64,
    #[serde(rename = "MT_inv", deserialize_with = "number")]
    pub mt_inv: f64,
    #[serde(rename = "RBK_inv", deserialize_with = "number")]
    pub rbk_inv: f64,
    #[serde(rename = "PRG_inv", deserialize_with = "number")]
    pub prg_inv: f64,
    #[serde(rename = "EB_inv", deserialize_with = "number")]
    pub eb_inv: f64,
}

impl Weights {
    pub fn entries(&self, face: Face) -> Vec<(&'static str, f64)> {
        match face {
            Face::Spec => {
                let w = &self.spec;
                vec![
                    ("RC", w.rc),
                    ("TR", w.tr),
                    ("AM_inv", w.am_inv),
                    ("CN_inv", w.cn_inv),
                    ("EX", w.ex),
                ]
            }
            Face::Code => {
                let w = &self.code;
                vec![
                    ("SA", w.sa),
                    ("CC_inv", w.cc_inv),
                    ("DP_inv", w.dp_inv),
                    ("DE", w.de),
                    ("DT", w.dt),
                    ("PF", w.pf),
                ]
            }
            Face::Test => {
                let w = &self.test;
                vec![
                    ("CV", w.cv),
                    ("MT", w.mt),
                    ("FL_inv", w.fl_inv),
                    ("SK_inv", w.sk_inv),
                    ("ST", w.st),
                ]
            }
            Face::Sec => {
                let w = &self.sec;
                vec![
                    ("VV", w.vv),
                    ("SE", w.se),
                    ("DPV_inv", w.dpv_inv),
                    ("AT", w.at),
                    ("ML", w.ml),
                ]
            }
            Face::Pr => {
                let w = &self.pr;
                vec![
                    ("RR", w.rr),
                    ("RK_inv", w.rk_inv),
                    ("DV", w.dv),
                    ("RB_inv", w.rb_inv),
                    ("CI", w.ci),
                ]
            }
            Face::Dep => {
                let w = &self.dep;
                vec![
                    ("SR", w.sr),
                    ("CFR_inv", w.cfr_inv),
                    ("MT_inv", w.mt_inv),
                    ("RBK_inv", w.rbk_inv),
                    ("PRG_inv", w.prg_inv),
                    ("EB_inv", w.eb_inv),
                ]
            }
        }
    }

    pub fn sum(&self, face: Face) -> f64 {
        self.entries(face).iter().map(|(_, weight)| weight).sum()
    }
}

impl Thresholds {
    pub fn entries(&self) -> [(Face, &'static str, f64); 8] {
        [
            (Face::Spec, "ambig_tau", self.spec.ambig_tau),
            (Face::Spec, "conflict_tau", self.spec.conflict_tau),
            (Face::Code, "cc_tau", self.code.cc_tau),
            (Face::Test, "low_mt_tau", self.test.low_mt_tau),
            (Face::Test, "low_cv_tau", self.test.low_cv_tau),
            (Face::Pr, "risk_tau", self.pr.risk_tau),
            (Face::Dep, "perf_reg_tau", self.dep.perf_reg_tau),
            (Face::Dep, "cfr_tau", self.dep.cfr_tau),
        ]
    }
}

impl ScoreConfig {
    /// External weights of the active profile, if the profile is defined.
    pub fn profile_weights(&self) -> Option<&ProfileWeights> {
        self.external_weights.get(&self.profile)
    }

    /// Faces whose weights do not sum to 1.0. Allowed, but usually a typo.
    /// A sum above 1.0 lets the face exceed 100.
    pub fn weight_sum_drift(&self) -> Vec<(Face, f64)> {
        Face::ALL
            .into_iter()
            .map(|face| (face, self.weights.sum(face)))
            .filter(|(_, sum)| (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(version) = self.version {
            if version != SUPPORTED_VERSION {
                return Err(ScoreError::InvalidConfig(format!(
                    "unsupported version: {version} (expected {SUPPORTED_VERSION})"
                )));
            }
        }

        if self.profile.trim().is_empty() {
            return Err(ScoreError::InvalidConfig(
                "profile must be a non-empty name".to_string(),
            ));
        }

        if !(self.k_steep.is_finite() && self.k_steep > 0.0) {
            return Err(ScoreError::InvalidConfig(format!(
                "k_steep must be a positive number (found {})",
                self.k_steep
            )));
        }

        for (name, value) in [
            ("floor_each", self.gate.floor_each),
            ("min_each", self.gate.min_each),
            ("min_geo", self.gate.min_geo),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ScoreError::InvalidConfig(format!(
                    "gate.{name} must be between 0 and 100 (found {value})"
                )));
            }
        }

        for face in Face::ALL {
            for (key, weight) in self.weights.entries(face) {
                if !(weight.is_finite() && weight >= 0.0) {
                    return Err(ScoreError::InvalidConfig(format!(
                        "weights.{face}.{key} must be a non-negative number (found {weight})"
                    )));
                }
            }
        }

        for (face, key, tau) in self.thresholds.entries() {
            if !tau.is_finite() {
                return Err(ScoreError::InvalidConfig(format!(
                    "thresholds.{face}.{key} must be a finite number"
                )));
            }
        }

        for (profile, weights) in &self.external_weights {
            for face in Face::ALL {
                if let Some(multiplier) = weights.get(face) {
                    if !(multiplier.is_finite() && multiplier >= 0.0) {
                        return Err(ScoreError::InvalidConfig(format!(
                            "external_weights.{profile}.{face} must be a non-negative number (found {multiplier})"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Starter configuration written by `init`: the reference weight set,
    /// a strict gate, and the `sre` and `speed` profiles.
    pub fn starter() -> Self {
        let mut external_weights = BTreeMap::new();
        external_weights.insert(
            "sre".to_string(),
            ProfileWeights {
                spec: Some(1.0),
                code: Some(1.0),
                test: Some(1.0),
                sec: Some(1.2),
                pr: Some(1.0),
                dep: Some(1.2),
            },
        );
        external_weights.insert(
            "speed".to_string(),
            ProfileWeights {
                spec: Some(1.15),
                code: Some(1.15),
                test: Some(1.15),
                sec: Some(0.9),
                pr: Some(1.15),
                dep: Some(0.9),
            },
        );

        Self {
            version: Some(SUPPORTED_VERSION),
            profile: DEFAULT_PROFILE.to_string(),
            k_steep: DEFAULT_K_STEEP,
            gate: GateConfig {
                floor_each: 5.0,
                min_each: 70.0,
                min_geo: 80.0,
            },
            external_weights,
            thresholds: Thresholds {
                spec: SpecThresholds {
                    ambig_tau: 0.6,
                    conflict_tau: 0.6,
                },
                code: CodeThresholds { cc_tau: 0.7 },
                test: TestThresholds {
                    low_mt_tau: 0.6,
                    low_cv_tau: 0.7,
                },
                pr: PrThresholds { risk_tau: 0.7 },
                dep: DepThresholds {
                    perf_reg_tau: 0.6,
                    cfr_tau: 0.5,
                },
            },
            weights: Weights {
                spec: SpecWeights {
                    rc: 0.3,
                    tr: 0.25,
                    am_inv: 0.2,
                    cn_inv: 0.15,
                    ex: 0.1,
                },
                code: CodeWeights {
                    sa: 0.28,
                    cc_inv: 0.2,
                    dp_inv: 0.12,
                    de: 0.18,
                    dt: 0.12,
                    pf: 0.1,
                },
                test: TestWeights {
                    cv: 0.32,
                    mt: 0.32,
                    fl_inv: 0.16,
                    sk_inv: 0.1,
                    st: 0.1,
                },
                sec: SecWeights {
                    vv: 0.34,
                    se: 0.2,
                    dpv_inv: 0.16,
                    at: 0.2,
                    ml: 0.1,
                },
                pr: PrWeights {
                    rr: 0.28,
                    rk_inv: 0.22,
                    dv: 0.18,
                    rb_inv: 0.12,
                    ci: 0.2,
                },
                dep: DepWeights {
                    sr: 0.22,
                    cfr_inv: 0.22,
                    mt_inv: 0.18,
                    rbk_inv: 0.12,
                    prg_inv: 0.16,
                    eb_inv: 0.1,
                },
            },
        }
    }
}

#[derive(Clone, Copy)]
struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

/// Config scalars may arrive as numeric strings; anything else non-numeric fails.
fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(NumberVisitor)
}

fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    number(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = include_str!("../../tests/fixtures/score-function.toml");

    fn reference() -> ScoreConfig {
        toml::from_str(REFERENCE).expect("reference config should parse")
    }

    #[test]
    fn parse_reference_config() {
        let cfg = reference();
        assert_eq!(cfg.profile, "sre");
        assert_eq!(cfg.k_steep, 14.0);
        assert_eq!(
            cfg.gate,
            GateConfig {
                floor_each: 40.0,
                min_each: 50.0,
                min_geo: 70.0,
            }
        );
        assert_eq!(cfg.weights.spec.am_inv, 0.2);
        assert_eq!(cfg.thresholds.spec.conflict_tau, 0.47);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn optional_knobs_fall_back_to_defaults() {
        let toml_str = r#"
[gate]
floor_each = 5
min_each = 70
min_geo = 80

[thresholds.spec]
ambig_tau = 0.6
conflict_tau = 0.6
[thresholds.code]
cc_tau = 0.7
[thresholds.test]
low_mt_tau = 0.6
low_cv_tau = 0.7
[thresholds.pr]
risk_tau = 0.7
[thresholds.dep]
perf_reg_tau = 0.6
cfr_tau = 0.5

[weights.spec]
RC = 1.0
[weights.code]
[weights.test]
[weights.sec]
[weights.pr]
[weights.dep]
"#;
        let cfg: ScoreConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.k_steep, DEFAULT_K_STEEP);
        assert_eq!(cfg.profile, DEFAULT_PROFILE);
        assert!(cfg.external_weights.is_empty());
        assert!(cfg.profile_weights().is_none());
        assert_eq!(cfg.weights.spec.tr, 0.0);
        assert_eq!(cfg.weights.dep.sr, 0.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_gate_is_a_parse_error() {
        let stripped = REFERENCE.replace("[gate]", "[unused_gate]");
        let err = toml::from_str::<ScoreConfig>(&stripped).expect_err("gate is required");
        assert!(err.to_string().contains("missing field `gate`"));
    }

    #[test]
    fn missing_exercised_tau_is_a_parse_error() {
        let stripped = REFERENCE.replace("cc_tau = 0.7", "");
        let err = toml::from_str::<ScoreConfig>(&stripped).expect_err("cc_tau is required");
        assert!(err.to_string().contains("cc_tau"));
    }

    #[test]
    fn unknown_weight_key_is_rejected() {
        let typo = REFERENCE.replace("AM_inv = 0.2", "AM_Inv = 0.2");
        let err = toml::from_str::<ScoreConfig>(&typo).expect_err("typo should be rejected");
        assert!(err.to_string().contains("AM_Inv"));
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let json = serde_json::json!({
            "k_steep": "12",
            "gate": { "floor_each": "40", "min_each": 50, "min_geo": 70.0 },
            "external_weights": { "sre": { "sec": "1.2" } },
            "thresholds": {
                "spec": { "ambig_tau": "0.6", "conflict_tau": 0.47 },
                "code": { "cc_tau": 0.7 },
                "test": { "low_mt_tau": 0.6, "low_cv_tau": 0.7 },
                "pr": { "risk_tau": 0.7 },
                "dep": { "perf_reg_tau": 0.6, "cfr_tau": 0.5 }
            },
            "weights": {
                "spec": { "RC": " 0.5 " }, "code": {}, "test": {},
                "sec": {}, "pr": {}, "dep": {}
            }
        });
        let cfg: ScoreConfig = serde_json::from_value(json).expect("coercible config should parse");
        assert_eq!(cfg.k_steep, 12.0);
        assert_eq!(cfg.gate.floor_each, 40.0);
        assert_eq!(cfg.weights.spec.rc, 0.5);
        assert_eq!(cfg.thresholds.spec.ambig_tau, 0.6);
        assert_eq!(
            cfg.profile_weights().map(|weights| weights.multiplier(Face::Sec)),
            Some(1.2)
        );
        assert_eq!(
            cfg.profile_weights().map(|weights| weights.multiplier(Face::Dep)),
            Some(1.0)
        );
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        let broken = REFERENCE.replace("cc_tau = 0.7", "cc_tau = \"high\"");
        let err = toml::from_str::<ScoreConfig>(&broken).expect_err("non-numeric tau should fail");
        assert!(err.to_string().contains("a number or a numeric string"));
    }

    #[test]
    fn unknown_profile_face_is_ignored() {
        let typo = REFERENCE.replace("[external_weights.sre]", "[external_weights.sre]\nsecurity = 1.1");
        let cfg: ScoreConfig = toml::from_str(&typo).expect("unknown profile faces are tolerated");
        assert!(cfg.validate().is_ok());
        assert_eq!(
            cfg.profile_weights().map(|weights| weights.multiplier(Face::Sec)),
            Some(1.0)
        );
    }

    #[test]
    fn validate_rejects_gate_out_of_range() {
        let mut cfg = reference();
        cfg.gate.min_geo = 120.0;
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("gate.min_geo must be between 0 and 100"));
    }

    #[test]
    fn validate_rejects_non_positive_steepness() {
        let mut cfg = reference();
        cfg.k_steep = 0.0;
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("k_steep must be a positive number"));
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let mut cfg = reference();
        cfg.weights.code.dt = -0.1;
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("weights.code.DT"));
    }

    #[test]
    fn face_weights_above_one_are_allowed_and_reported() {
        let mut cfg = reference();
        cfg.weights.pr.rr = 0.9;
        assert!(cfg.validate().is_ok());
        let drift = cfg.weight_sum_drift();
        assert!(drift.iter().any(|(face, sum)| *face == Face::Pr && (sum - 1.62).abs() < 1e-9));
    }

    #[test]
    fn validate_rejects_negative_profile_multiplier() {
        let mut cfg = reference();
        cfg.external_weights
            .entry("sre".to_string())
            .or_default()
            .dep = Some(-1.0);
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("external_weights.sre.dep"));
    }

    #[test]
    fn validate_rejects_unsupported_version() {
        let mut cfg = reference();
        cfg.version = Some(2);
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported version: 2"));
    }

    #[test]
    fn weight_sum_drift_reports_only_faces_off_one() {
        let cfg = reference();
        let drift = cfg.weight_sum_drift();
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].0, Face::Spec);
        assert!((drift[0].1 - 0.92).abs() < 1e-9);
    }

    #[test]
    fn starter_config_is_valid_and_balanced() {
        let cfg = ScoreConfig::starter();
        assert!(cfg.validate().is_ok());
        assert!(cfg.weight_sum_drift().is_empty());
        assert_eq!(
            cfg.profile_weights().map(|weights| weights.multiplier(Face::Sec)),
            Some(1.2)
        );
    }

    #[test]
    fn starter_config_survives_toml_rendering() {
        let rendered = toml::to_string_pretty(&ScoreConfig::starter()).expect("starter should render");
        let parsed: ScoreConfig = toml::from_str(&rendered).expect("rendered starter should parse");
        assert_eq!(parsed.gate.min_geo, 80.0);
        assert_eq!(parsed.weights.dep.prg_inv, 0.16);
        assert_eq!(parsed.external_weights.len(), 2);
    }
}
