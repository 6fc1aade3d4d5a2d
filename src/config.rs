//! Configuration handling for the TUI

use crate::submit::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the submission endpoint
pub const ENDPOINT_ENV: &str = "ONBOARD_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OnboardConfig {
    /// Submission endpoint URL
    pub endpoint: Option<String>,
    /// Render the password field as `*` (default true)
    pub mask_password: Option<bool>,
}

impl OnboardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "onboard", "onboard-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: OnboardConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint to submit to: environment, then file, then the default
    pub fn resolve_endpoint(&self) -> String {
        self.endpoint_with(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|s| !s.is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OnboardConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.mask_password.is_none());
        assert!(config.mask_password());
    }

    #[test]
    fn test_serialization() {
        let config = OnboardConfig {
            endpoint: Some("http://localhost:8080/users".to_string()),
            mask_password: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: OnboardConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint,
            Some("http://localhost:8080/users".to_string())
        );
        assert_eq!(parsed.mask_password, Some(false));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: OnboardConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://x/users", "unknown_field": "value"}"#;
        let parsed: OnboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint, Some("http://x/users".to_string()));
    }

    #[test]
    fn test_endpoint_falls_back_to_default() {
        let config = OnboardConfig::default();
        assert_eq!(config.endpoint_with(None), "https://reqres.in/api/users");
    }

    #[test]
    fn test_endpoint_from_file() {
        let config = OnboardConfig {
            endpoint: Some("http://file/users".to_string()),
            ..Default::default()
        };
        assert_eq!(config.endpoint_with(None), "http://file/users");
    }

    #[test]
    fn test_env_overrides_file() {
        let config = OnboardConfig {
            endpoint: Some("http://file/users".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint_with(Some("http://env/users".to_string())),
            "http://env/users"
        );
        // Empty override is ignored
        assert_eq!(
            config.endpoint_with(Some(String::new())),
            "http://file/users"
        );
    }

    #[test]
    fn test_load_returns_ok() {
        let result = OnboardConfig::load();
        assert!(result.is_ok());
    }
}
