use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

pub type Score = f64;

/// One of the six scoring dimensions, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Spec,
    Code,
    Test,
    Sec,
    Pr,
    Dep,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Spec,
        Face::Code,
        Face::Test,
        Face::Sec,
        Face::Pr,
        Face::Dep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spec => "spec",
            Self::Code => "code",
            Self::Test => "test",
            Self::Sec => "sec",
            Self::Pr => "pr",
            Self::Dep => "dep",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceScores {
    pub spec: Score,
    pub code: Score,
    pub test: Score,
    pub sec: Score,
    pub pr: Score,
    pub dep: Score,
}

impl FaceScores {
    pub fn from_fn(mut score_of: impl FnMut(Face) -> Score) -> Self {
        Self {
            spec: score_of(Face::Spec),
            code: score_of(Face::Code),
            test: score_of(Face::Test),
            sec: score_of(Face::Sec),
            pr: score_of(Face::Pr),
            dep: score_of(Face::Dep),
        }
    }

    pub fn get(&self, face: Face) -> Score {
        match face {
            Face::Spec => self.spec,
            Face::Code => self.code,
            Face::Test => self.test,
            Face::Sec => self.sec,
            Face::Pr => self.pr,
            Face::Dep => self.dep,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, Score)> + '_ {
        Face::ALL.into_iter().map(move |face| (face, self.get(face)))
    }

    pub fn min(&self) -> Score {
        self.iter()
            .map(|(_, score)| score)
            .fold(f64::INFINITY, f64::min)
    }
}

/// Rounds to four decimals; applied on output only.
pub fn round4(value: f64) -> f64 {
    (value * 1e4).round() / 1e4
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round4(*value))
}

impl Serialize for FaceScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FaceScores", Face::ALL.len())?;
        for (face, score) in self.iter() {
            state.serialize_field(face.as_str(), &round4(score))?;
        }
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub faces: FaceScores,
    pub weighted_faces: FaceScores,
    #[serde(serialize_with = "serialize_rounded")]
    pub geo: Score,
    #[serde(rename = "final", serialize_with = "serialize_rounded")]
    pub final_score: Score,
    pub gate_ok: bool,
    pub profile: String,
}
