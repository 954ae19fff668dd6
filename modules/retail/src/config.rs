//! Configuration for the retail module

use crate::domain::validation::{validate_hour, HOURS};
use serde::{Deserialize, Serialize};

/// Retail module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Opening hour for stores created without one
    #[serde(default = "default_business_hours_start")]
    pub default_business_hours_start: i32,

    /// Closing hour for stores created without one
    #[serde(default = "default_business_hours_end")]
    pub default_business_hours_end: i32,

    /// Upper bound for the `limit` of list requests
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_business_hours_start: default_business_hours_start(),
            default_business_hours_end: default_business_hours_end(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Config {
    /// Default hours must pass the same range check as stored hours
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, hour) in [
            ("default_business_hours_start", self.default_business_hours_start),
            ("default_business_hours_end", self.default_business_hours_end),
        ] {
            validate_hour(name, hour).map_err(|e| {
                anyhow::anyhow!("invalid retail config: {e} (allowed {HOURS:?})")
            })?;
        }

        if self.max_page_size == 0 {
            anyhow::bail!("invalid retail config: max_page_size must be positive");
        }
        Ok(())
    }
}

fn default_business_hours_start() -> i32 {
    8
}

fn default_business_hours_end() -> i32 {
    17
}

fn default_max_page_size() -> u64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.default_business_hours_start, 8);
        assert_eq!(cfg.default_business_hours_end, 17);
        cfg.validate().unwrap();
    }

    #[test]
    fn out_of_range_default_hour_is_rejected() {
        let cfg = Config {
            default_business_hours_end: 24,
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("default_business_hours_end"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let cfg = Config {
            max_page_size: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
