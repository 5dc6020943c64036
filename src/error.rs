use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("metrics parse error: {0}")]
    MetricsParse(String),

    #[error("missing face '{0}' in metrics")]
    MissingFace(String),

    #[error("invalid metrics for face '{face}': {reason}")]
    InvalidFace { face: String, reason: String },

    #[error("refusing to overwrite existing file: {0} (use --force)")]
    FileExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
