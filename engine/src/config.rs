use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::rarity::{RarityRule, MAX_TUNED, RARE_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TunerConfig {
    /// Simulators covered by an `all` target.
    #[serde(default = "default_simulators")]
    pub default_simulators: Vec<String>,
    #[serde(default)]
    pub tune_cost: u64,
    #[serde(default = "default_threshold")]
    pub rare_threshold: f64,
    #[serde(default = "default_max_tuned")]
    pub max_tuned: usize,
}

fn default_simulators() -> Vec<String> {
    vec!["dolphindive".to_string()]
}

fn default_threshold() -> f64 {
    RARE_THRESHOLD
}

fn default_max_tuned() -> usize {
    MAX_TUNED
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            default_simulators: default_simulators(),
            tune_cost: 0,
            rare_threshold: RARE_THRESHOLD,
            max_tuned: MAX_TUNED,
        }
    }
}

impl TunerConfig {
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let config: Self = parse_by_extension(path, text)?;
        config.validate()?;
        Ok(config)
    }

    /// `max_tuned` must be in `1..=MAX_TUNED`, `rare_threshold` a finite value in `0..=1`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_TUNED).contains(&self.max_tuned) {
            return Err(EngineError::InvalidConfig(format!(
                "max_tuned {} outside 1..={}",
                self.max_tuned, MAX_TUNED
            )));
        }
        if !self.rare_threshold.is_finite() || !(0.0..=1.0).contains(&self.rare_threshold) {
            return Err(EngineError::InvalidConfig(format!(
                "rare_threshold {} outside 0..=1",
                self.rare_threshold
            )));
        }
        Ok(())
    }

    pub fn rule(&self) -> RarityRule {
        RarityRule {
            threshold: self.rare_threshold,
            max_tuned: self.max_tuned,
        }
    }
}

/// Parse YAML or JSON, picked by file extension (`.json` is JSON, anything else YAML).
pub fn parse_by_extension<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(serde_yaml::from_str(text)?)
    }
}
