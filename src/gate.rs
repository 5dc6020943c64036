//! Aggregation and the pass/fail gate.
//!
//! The per-face bar (`min_each`) is checked against the *raw* face scores,
//! while `geo` is built from profile-weighted, floored scores. The two checks
//! are kept separate on purpose; do not unify them.

use crate::faces::shaping::clip;
use crate::types::config::{GateConfig, ScoreConfig};
use crate::types::scoring::{Face, FaceScores, Score, ScoreResult};
use tracing::{debug, info, warn};

/// Maximal uncertainty removes at most this share of `geo`.
const UNCERTAINTY_DISCOUNT: f64 = 0.1;

pub fn aggregate(faces: FaceScores, config: &ScoreConfig, uncertainty_sigma: f64) -> ScoreResult {
    let profile = config.profile_weights();
    if profile.is_none() {
        if config.external_weights.is_empty() {
            debug!(profile = %config.profile, "no external weights configured");
        } else {
            warn!(
                profile = %config.profile,
                "profile not found in external_weights; every face weighted 1.0"
            );
        }
    }

    let weighted_faces = FaceScores::from_fn(|face| {
        faces.get(face) * profile.map_or(1.0, |weights| weights.multiplier(face))
    });
    let geo = geometric_mean(&weighted_faces, config.gate.floor_each);
    let sigma = clip(uncertainty_sigma);
    let final_score = geo * (1.0 - UNCERTAINTY_DISCOUNT * sigma);
    let gate_ok = passes(&faces, geo, &config.gate);

    debug!(geo, final_score, sigma, "aggregated faces");
    if !gate_ok {
        let failing = faces_below_min_each(&faces, &config.gate)
            .iter()
            .map(|face| face.as_str())
            .collect::<Vec<_>>();
        info!(
            geo,
            min_geo = config.gate.min_geo,
            failing = ?failing,
            "gate rejected change"
        );
    }

    ScoreResult {
        faces,
        weighted_faces,
        geo,
        final_score,
        gate_ok,
        profile: config.profile.clone(),
    }
}

/// `100 * (prod max(floor, face) / 100)^(1/6)`.
pub fn geometric_mean(weighted_faces: &FaceScores, floor_each: f64) -> Score {
    let product: f64 = weighted_faces
        .iter()
        .map(|(_, score)| floor_each.max(score) / 100.0)
        .product();
    100.0 * product.powf(1.0 / Face::ALL.len() as f64)
}

pub fn passes(faces: &FaceScores, geo: Score, gate: &GateConfig) -> bool {
    faces.min() >= gate.min_each && geo >= gate.min_geo
}

pub fn faces_below_min_each(faces: &FaceScores, gate: &GateConfig) -> Vec<Face> {
    faces
        .iter()
        .filter(|(_, score)| *score < gate.min_each)
        .map(|(face, _)| face)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::reference_config;
    use crate::types::config::ProfileWeights;

    fn uniform(score: f64) -> FaceScores {
        FaceScores::from_fn(|_| score)
    }

    #[test]
    fn uniform_faces_have_that_geometric_mean() {
        let geo = geometric_mean(&uniform(81.0), 40.0);
        assert!((geo - 81.0).abs() < 1e-9);
    }

    #[test]
    fn floor_replaces_scores_below_it() {
        let config = reference_config();
        let mut low = uniform(90.0);
        low.code = 30.0;
        let mut lower = low;
        lower.code = 2.0;
        let mut at_floor = low;
        at_floor.code = config.gate.floor_each;

        let geo_low = geometric_mean(&low, config.gate.floor_each);
        assert_eq!(geo_low, geometric_mean(&lower, config.gate.floor_each));
        assert_eq!(geo_low, geometric_mean(&at_floor, config.gate.floor_each));
    }

    #[test]
    fn raising_a_face_never_lowers_geo_or_flips_the_gate() {
        let config = reference_config();
        let base = FaceScores {
            spec: 72.0,
            code: 55.0,
            test: 88.0,
            sec: 64.0,
            pr: 91.0,
            dep: 77.0,
        };
        let before = aggregate(base, &config, 0.2);
        assert!(before.gate_ok);

        for face in Face::ALL {
            for bump in [0.5, 5.0, 20.0] {
                let raised = FaceScores::from_fn(|other| {
                    let score = base.get(other);
                    if other == face {
                        (score + bump).min(100.0)
                    } else {
                        score
                    }
                });
                let after = aggregate(raised, &config, 0.2);
                assert!(after.geo >= before.geo, "{face} +{bump}");
                assert!(after.gate_ok, "{face} +{bump}");
            }
        }
    }

    #[test]
    fn gate_requires_every_raw_face_and_geo() {
        let config = reference_config();
        let mut faces = uniform(95.0);
        assert!(aggregate(faces, &config, 0.0).gate_ok);

        faces.sec = 49.9;
        let result = aggregate(faces, &config, 0.0);
        assert!(result.geo > config.gate.min_geo);
        assert!(!result.gate_ok);
        assert_eq!(faces_below_min_each(&faces, &config.gate), vec![Face::Sec]);

        let mut strict = config.clone();
        strict.gate.min_geo = 99.0;
        assert!(!aggregate(uniform(95.0), &strict, 0.0).gate_ok);
    }

    #[test]
    fn min_each_uses_raw_scores_while_geo_uses_profile_weights() {
        let mut config = reference_config();
        config.profile = "boosted".to_string();
        config.external_weights.insert(
            "boosted".to_string(),
            ProfileWeights {
                pr: Some(2.0),
                ..ProfileWeights::default()
            },
        );
        let mut faces = uniform(80.0);
        faces.pr = 45.0;

        let result = aggregate(faces, &config, 0.0);
        assert_eq!(result.weighted_faces.pr, 90.0);
        assert_eq!(result.weighted_faces.spec, 80.0);
        assert!(result.geo > 80.0);
        assert!(!result.gate_ok);
        assert_eq!(result.profile, "boosted");
    }

    #[test]
    fn unknown_profile_weights_every_face_at_one() {
        let mut config = reference_config();
        config.profile = "missing".to_string();
        let faces = uniform(70.0);
        let result = aggregate(faces, &config, 0.0);
        assert_eq!(result.weighted_faces, faces);
        assert_eq!(result.profile, "missing");
    }

    #[test]
    fn uncertainty_discount_is_bounded() {
        let config = reference_config();
        let faces = FaceScores {
            spec: 82.0,
            code: 61.0,
            test: 90.0,
            sec: 73.0,
            pr: 85.0,
            dep: 95.0,
        };
        for sigma in [-1.0, 0.0, 0.1, 0.5, 0.99, 1.0, 4.0] {
            let result = aggregate(faces, &config, sigma);
            assert!(result.final_score <= result.geo);
            assert!(result.final_score >= 0.9 * result.geo - 1e-12);
        }
        let full = aggregate(faces, &config, 1.0);
        assert!((full.final_score - 0.9 * full.geo).abs() < 1e-9);
        let none = aggregate(faces, &config, 0.0);
        assert_eq!(none.final_score, none.geo);
    }
}
