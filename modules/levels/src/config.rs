//! Configuration for the levels module

use serde::{Deserialize, Serialize};

/// Levels module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Difficulty assigned to levels created without one
    #[serde(default = "default_difficulty")]
    pub default_difficulty: i32,

    /// Upper bound for the `limit` of list requests
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_difficulty: default_difficulty(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_page_size == 0 {
            anyhow::bail!("invalid levels config: max_page_size must be positive");
        }
        Ok(())
    }
}

fn default_difficulty() -> i32 {
    1
}

fn default_max_page_size() -> u64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.default_difficulty, 1);
        assert_eq!(cfg.max_page_size, 100);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<Config>(r#"{"max_page_sise": 5}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let cfg = Config {
            max_page_size: 0,
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("max_page_size"));
        Config::default().validate().unwrap();
    }
}
