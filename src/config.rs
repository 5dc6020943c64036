use crate::error::{Result, ScoreError};
use crate::types::config::ScoreConfig;
use crate::types::scoring::Face;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "score-function.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            _ => Err(ScoreError::ConfigParse(format!(
                "{}: unsupported config format (expected .toml, .json, .yml or .yaml)",
                path.display()
            ))),
        }
    }
}

/// One config file as read from disk.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ScoreConfig,
    /// Base file first, then overlays in merge order.
    pub sources: Vec<ConfigSource>,
}

/// Loads `path`, deep-merges each overlay on top in order, applies the
/// profile override and validates the result.
pub fn load_config(path: &Path, overlays: &[PathBuf], profile: Option<&str>) -> Result<LoadedConfig> {
    let mut sources = Vec::with_capacity(overlays.len() + 1);
    let (mut merged, bytes) = read_document(path)?;
    sources.push(ConfigSource {
        path: path.to_path_buf(),
        bytes,
    });
    for overlay in overlays {
        let (value, bytes) = read_document(overlay)?;
        merge_value(&mut merged, value);
        sources.push(ConfigSource {
            path: overlay.clone(),
            bytes,
        });
    }

    for (profile, key) in unknown_profile_faces(&merged) {
        warn!(profile = %profile, key = %key, "external_weights entry names no face; ignored");
    }

    let mut cfg: ScoreConfig = serde_json::from_value(merged)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    if let Some(name) = profile {
        cfg.profile = name.to_string();
    }
    cfg.validate()?;

    info!(
        path = %path.display(),
        overlays = overlays.len(),
        profile = %cfg.profile,
        "config loaded"
    );
    for (face, sum) in cfg.weight_sum_drift() {
        if sum > 1.0 {
            warn!(face = %face, sum, "face weights sum above 1.0; the face can exceed 100");
        } else {
            info!(face = %face, sum, "face weights do not sum to 1.0");
        }
    }
    Ok(LoadedConfig {
        config: cfg,
        sources,
    })
}

pub fn render_config(cfg: &ScoreConfig, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Toml => Ok(toml::to_string_pretty(cfg)?),
        ConfigFormat::Json => Ok(serde_json::to_string_pretty(cfg)?),
        ConfigFormat::Yaml => Err(ScoreError::ConfigParse(
            "writing YAML configs is not supported".to_string(),
        )),
    }
}

fn read_document(path: &Path) -> Result<(Value, Vec<u8>)> {
    let format = ConfigFormat::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|source| ScoreError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let parse_error =
        |detail: String| ScoreError::ConfigParse(format!("{}: {}", path.display(), single_line(&detail)));
    let content = std::str::from_utf8(&bytes).map_err(|e| parse_error(e.to_string()))?;

    let value = match format {
        ConfigFormat::Toml => toml::from_str::<Value>(content)
            .map_err(|e| parse_error(toml_diagnostic(content, &e)))?,
        ConfigFormat::Json => {
            serde_json::from_str::<Value>(content).map_err(|e| parse_error(e.to_string()))?
        }
        ConfigFormat::Yaml => read_restricted_yaml(content).map_err(parse_error)?,
    };

    if !value.is_object() {
        return Err(parse_error("top level must be a mapping".to_string()));
    }
    Ok((value, bytes))
}

fn toml_diagnostic(content: &str, error: &toml::de::Error) -> String {
    let message = single_line(error.message());
    match error.span() {
        Some(span) => {
            let line = content[..span.start.min(content.len())].matches('\n').count() + 1;
            format!("line {line}: {message}")
        }
        None => message,
    }
}

// Parser messages may span lines; diagnostics must not.
fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// YAML configs are limited to mappings and scalars: no sequences, anchors,
/// aliases or block scalars.
fn read_restricted_yaml(content: &str) -> std::result::Result<Value, String> {
    for (index, line) in content.lines().enumerate() {
        let body = line.trim_start();
        if body.starts_with('#') {
            continue;
        }
        let value = body.split_once(": ").map_or(body, |(_, value)| value).trim_start();
        let unsupported = match value.chars().next() {
            Some('&') | Some('*') => Some("anchors and aliases are not supported"),
            Some('|') | Some('>') => Some("multi-line scalars are not supported"),
            _ => None,
        };
        if let Some(reason) = unsupported {
            return Err(format!("line {}: {reason}", index + 1));
        }
    }

    let value: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    reject_sequences(&value, "")?;
    Ok(value)
}

fn reject_sequences(value: &Value, at: &str) -> std::result::Result<(), String> {
    match value {
        Value::Array(_) => Err(format!(
            "{}: sequences are not supported",
            if at.is_empty() { "top level" } else { at }
        )),
        Value::Object(map) => map.iter().try_for_each(|(key, child)| {
            if at.is_empty() {
                reject_sequences(child, key)
            } else {
                reject_sequences(child, &format!("{at}.{key}"))
            }
        }),
        _ => Ok(()),
    }
}

fn unknown_profile_faces(document: &Value) -> Vec<(String, String)> {
    let mut unknown = Vec::new();
    let Some(profiles) = document.get("external_weights").and_then(Value::as_object) else {
        return unknown;
    };
    for (profile, weights) in profiles {
        let Some(weights) = weights.as_object() else {
            continue;
        };
        for key in weights.keys() {
            if !Face::ALL.iter().any(|face| face.as_str() == key) {
                unknown.push((profile.clone(), key.clone()));
            }
        }
    }
    unknown
}

fn merge_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
