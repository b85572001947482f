// src/import/options.rs
// Run-level configuration recognized by the import core
// Every field carries a serde default so hosts can pass partial JSON
// RELEVANT FILES:src/import/pipeline.rs,src/import/rules.rs

use serde::{Deserialize, Serialize};

/// How a way matching more than one rule predicate is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Only the first matching rule (in documented evaluation order) runs.
    #[default]
    FirstMatch,
    /// Every matching rule runs; in isolated mode the way emits one entity
    /// per match.
    AllMatches,
}

/// Options selected once per import run, never per way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Merge every way into one shared mesh instead of emitting one named
    /// entity per way.
    pub single_mesh: bool,
    /// Extrusion thickness applied to buildings without a parseable `height`
    /// tag. Zero leaves such buildings flat.
    pub default_wall_thickness: f32,
    pub match_policy: MatchPolicy,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            single_mesh: false,
            default_wall_thickness: 0.0,
            match_policy: MatchPolicy::FirstMatch,
        }
    }
}

/// Error type for options loading.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ImportOptions {
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_isolated_flat_first_match() {
        let options = ImportOptions::default();
        assert!(!options.single_mesh);
        assert_eq!(options.default_wall_thickness, 0.0);
        assert_eq!(options.match_policy, MatchPolicy::FirstMatch);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let options = ImportOptions::from_json_str(r#"{"single_mesh": true}"#).unwrap();
        assert!(options.single_mesh);
        assert_eq!(options.match_policy, MatchPolicy::FirstMatch);
    }

    #[test]
    fn match_policy_uses_snake_case() {
        let options =
            ImportOptions::from_json_str(r#"{"match_policy": "all_matches"}"#).unwrap();
        assert_eq!(options.match_policy, MatchPolicy::AllMatches);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ImportOptions::from_json_str("{").is_err());
    }
}
