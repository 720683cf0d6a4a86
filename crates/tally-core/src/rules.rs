//! Recommendation rules configuration
//!
//! Each rule names a category, a threshold and the advice to show when the
//! category's mean amount exceeds the threshold.
//!
//! ## Configuration Resolution
//!
//! Rules are loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/tally/config/recommendations.toml) if it exists
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default rules (compiled into binary)
const DEFAULT_RULES: &str = include_str!("../../../config/recommendations.toml");

/// One spending rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Category to average over (exact match)
    pub category: String,
    /// Fires when the mean amount is strictly greater than this
    pub threshold: f64,
    /// Advice shown when the rule fires
    pub message: String,
}

/// Ordered set of recommendation rules
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RecommendationRules {
    rules: Vec<Rule>,
}

impl RecommendationRules {
    /// Build from explicit rules, validating each one
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        for rule in &rules {
            if rule.category.trim().is_empty() {
                return Err(Error::Config("rule category must not be empty".to_string()));
            }
            if !rule.threshold.is_finite() || rule.threshold < 0.0 {
                return Err(Error::Config(format!(
                    "rule for '{}' has invalid threshold {}",
                    rule.category, rule.threshold
                )));
            }
        }
        Ok(Self { rules })
    }

    /// The rules compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_RULES)
    }

    /// Load rules: explicit path, else the data-dir override, else the builtin set
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            debug!(path = %path.display(), "Loading recommendation rules");
            return Self::from_toml(&fs::read_to_string(path)?);
        }

        if let Some(default_path) = default_rules_path() {
            if default_path.exists() {
                debug!(path = %default_path.display(), "Loading recommendation rules override");
                return Self::from_toml(&fs::read_to_string(&default_path)?);
            }
        }

        Self::builtin()
    }

    /// Parse rules from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawRules = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid rules TOML: {}", e)))?;
        Self::new(raw.rules.unwrap_or_default())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Default rules override path
pub fn default_rules_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("recommendations.toml"))
}

/// Raw file structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawRules {
    rules: Option<Vec<Rule>>,
}
