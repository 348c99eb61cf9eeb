use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Process-wide configuration, passed explicitly into the summarizer rather
/// than read ad hoc from the environment.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// OpenRouter credential; absence is a server-configuration failure, not
    /// a per-request one
    pub api_key: Option<String>,
    pub model: Option<String>,
    /// Include upstream failure detail in error output
    pub show_detail: Option<bool>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
api_key = "sk-or-v1-abc"
model = "openai/gpt-5"
show_detail = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-or-v1-abc"));
        assert_eq!(config.model.as_deref(), Some("openai/gpt-5"));
        assert_eq!(config.show_detail, Some(true));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.api_key.is_none());
        assert!(config.model.is_none());
        assert!(config.show_detail.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(r#"model = "openai/gpt-4o""#).unwrap();
        assert_eq!(config.model.as_deref(), Some("openai/gpt-4o"));
        assert!(config.api_key.is_none());
    }
}
