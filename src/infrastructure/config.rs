//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the configuration snapshot is written
    pub output_path: PathBuf,
    /// Pretty-print the snapshot JSON
    pub pretty: bool,
    /// Build and verify only, without writing a snapshot
    pub skip_export: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            output_path: lookup("WORLDSEED_OUTPUT")
                .unwrap_or_else(|| "game_configuration.json".to_string())
                .into(),
            pretty: lookup("WORLDSEED_PRETTY")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("WORLDSEED_PRETTY must be true or false")?,
            skip_export: lookup("WORLDSEED_SKIP_EXPORT")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .context("WORLDSEED_SKIP_EXPORT must be true or false")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).expect("defaults are valid");
        assert_eq!(config.output_path, PathBuf::from("game_configuration.json"));
        assert!(config.pretty);
        assert!(!config.skip_export);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("WORLDSEED_OUTPUT", "/tmp/world.json"),
            ("WORLDSEED_PRETTY", "false"),
            ("WORLDSEED_SKIP_EXPORT", "true"),
        ])
        .expect("valid overrides");
        assert_eq!(config.output_path, PathBuf::from("/tmp/world.json"));
        assert!(!config.pretty);
        assert!(config.skip_export);
    }

    #[test]
    fn test_invalid_bool_is_reported() {
        let err = load(&[("WORLDSEED_PRETTY", "sometimes")]).expect_err("not a bool");
        assert!(err.to_string().contains("WORLDSEED_PRETTY"));
    }
}
