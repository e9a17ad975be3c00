//! Application configuration.
//!
//! Settings come from an optional JSON file, with environment variables
//! taking precedence (`NEWSCHECK_API_KEY`, `NEWSCHECK_API_BASE`,
//! `NEWSCHECK_MODEL`). The API key is a required secret supplied out-of-band.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;
use validator::Validate;

use crate::error::AppError;

/// Default lexicon of bias-signaling words, each mapped to its highlight class.
fn default_bias_lexicon() -> BTreeMap<String, String> {
    [
        "shocking",
        "disaster",
        "corrupt",
        "manipulative",
        "scandal",
        "biased",
        "fake",
        "propaganda",
    ]
    .iter()
    .map(|w| (w.to_string(), "bias-word".to_string()))
    .collect()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Cut points applied to the compound polarity score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct SentimentThresholds {
    /// Scores below this are reported as negative bias.
    #[validate(range(min = -1.0, max = 1.0))]
    pub negative: f64,
    /// Scores above this are reported as positive bias.
    #[validate(range(min = -1.0, max = 1.0))]
    pub positive: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            negative: -0.3,
            positive: 0.3,
        }
    }
}

/// Top-level configuration for the analysis engine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Secret key used to authenticate against the remote analysis endpoint.
    #[serde(default)]
    #[validate(length(min = 1, message = "api_key must not be empty"))]
    pub api_key: String,

    /// Base URL of the remote analysis endpoint.
    #[serde(default = "default_api_base")]
    #[validate(length(min = 1))]
    pub api_base: String,

    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    #[validate(length(min = 1))]
    pub model: String,

    /// Upper bound on a single remote call, in seconds.
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,

    /// Bias words to highlight, mapped to their highlight class.
    #[serde(default = "default_bias_lexicon")]
    pub bias_lexicon: BTreeMap<String, String>,

    /// Sentiment verdict cut points.
    #[serde(default)]
    #[validate(nested)]
    pub thresholds: SentimentThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            model: default_model(),
            request_timeout_secs: default_timeout_secs(),
            bias_lexicon: default_bias_lexicon(),
            thresholds: SentimentThresholds::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: JSON file if given, then environment overrides,
    /// then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut cfg = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)?;
                serde_json::from_str::<AppConfig>(&raw)
                    .map_err(|e| AppError::Config(format!("invalid config file {}: {}", p.display(), e)))?
            }
            None => AppConfig::default(),
        };

        if let Ok(key) = env::var("NEWSCHECK_API_KEY") {
            cfg.api_key = key;
        }
        if let Ok(base) = env::var("NEWSCHECK_API_BASE") {
            cfg.api_base = base;
        }
        if let Ok(model) = env::var("NEWSCHECK_MODEL") {
            cfg.model = model;
        }

        cfg.validate()?;

        if cfg.thresholds.negative >= cfg.thresholds.positive {
            return Err(AppError::Config(format!(
                "negative threshold ({}) must be below positive threshold ({})",
                cfg.thresholds.negative, cfg.thresholds.positive
            )));
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_has_eight_words() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bias_lexicon.len(), 8);
        assert!(cfg.bias_lexicon.contains_key("propaganda"));
    }

    #[test]
    fn test_missing_api_key_rejected() {
        temp_env::with_vars_unset(["NEWSCHECK_API_KEY"], || {
            let result = AppConfig::load(None);
            assert!(matches!(result, Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_env_override_wins() {
        temp_env::with_var("NEWSCHECK_API_KEY", Some("test-key"), || {
            let cfg = AppConfig::load(None).expect("config should load");
            assert_eq!(cfg.api_key, "test-key");
            assert_eq!(cfg.model, "gemini-1.5-flash");
        });
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");

        let mut cfg = AppConfig::default();
        cfg.api_key = "file-key".to_string();
        cfg.thresholds = SentimentThresholds {
            negative: -0.5,
            positive: 0.5,
        };
        std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();

        temp_env::with_vars_unset(
            ["NEWSCHECK_API_KEY", "NEWSCHECK_API_BASE", "NEWSCHECK_MODEL"],
            || {
                let loaded = AppConfig::load(Some(&path)).expect("config should load");
                assert_eq!(loaded.api_key, "file-key");
                assert_eq!(loaded.thresholds.positive, 0.5);
            },
        );
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut cfg = AppConfig::default();
        cfg.api_key = "k".to_string();
        cfg.thresholds = SentimentThresholds {
            negative: 0.4,
            positive: -0.4,
        };

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, serde_json::to_string(&cfg).unwrap()).unwrap();

        temp_env::with_vars_unset(["NEWSCHECK_API_KEY"], || {
            let result = AppConfig::load(Some(&path));
            assert!(matches!(result, Err(AppError::Config(_))));
        });
    }
}
